//! Mirror report model and mutable report builder.

use std::fmt;

/// Aggregate counters for one `mirror_tree` run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportMirror {
    /// Source directories walked (root included).
    pub cnt_dirs_visited: u64,
    /// Destination directories that did not exist before the run.
    pub cnt_dirs_created: u64,
    /// Files copied (or that would be copied on dry run).
    pub cnt_files_copied: u64,
    /// Bytes written to destination files.
    pub cnt_bytes_copied: u64,
    /// Entries dropped by exclude patterns.
    pub cnt_excluded: u64,
}

impl ReportMirror {
    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} dirs={} created={} files={} bytes={} excluded={}",
            self.cnt_dirs_visited,
            self.cnt_dirs_created,
            self.cnt_files_copied,
            self.cnt_bytes_copied,
            self.cnt_excluded
        )
    }
}

impl fmt::Display for ReportMirror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[MIRROR]"))
    }
}

/// Mutable accumulator for mirror statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportMirrorBuilder {
    report: ReportMirror,
}

impl ReportMirrorBuilder {
    pub fn add_dir_visited(&mut self) {
        self.report.cnt_dirs_visited += 1;
    }

    pub fn add_dir_created(&mut self) {
        self.report.cnt_dirs_created += 1;
    }

    /// Record one copied file of `n_bytes` bytes.
    pub fn add_file_copied(&mut self, n_bytes: u64) {
        self.report.cnt_files_copied += 1;
        self.report.cnt_bytes_copied += n_bytes;
    }

    pub fn add_excluded(&mut self) {
        self.report.cnt_excluded += 1;
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportMirror {
        self.report
    }
}
