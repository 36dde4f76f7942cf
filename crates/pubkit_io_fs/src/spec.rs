//! Mirror/scaffold specification models and top-level error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Pattern matching mode for exclude lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumMirrorPatternMode {
    /// Shell-like wildcards (`*`, `?`, character classes).
    #[default]
    Glob,
    /// Regular expression pattern.
    Regex,
    /// Substring match.
    Literal,
}

/// Filesystem operation that was running when a mirror step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumMirrorOp {
    /// Stat of a source entry.
    Inspect,
    /// Enumeration of a source directory.
    ReadDir,
    /// Creation of a destination directory.
    CreateDir,
    /// Byte copy of a source file.
    CopyFile,
}

impl EnumMirrorOp {
    fn as_str(self) -> &'static str {
        match self {
            Self::Inspect => "inspect",
            Self::ReadDir => "read directory",
            Self::CreateDir => "create directory",
            Self::CopyFile => "copy file",
        }
    }
}

impl std::fmt::Display for EnumMirrorOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What `ensure_entry_point` did (or would do) with the entry file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumEntryPointOutcome {
    /// Entry file was absent and has been written from the template.
    Created,
    /// Entry file was absent; dry run, nothing written.
    WouldCreate,
    /// Entry file already present and left untouched.
    Existing,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for `mirror_tree`.
#[derive(Debug, Clone, Default)]
pub struct SpecMirrorOptions {
    /// Exclude patterns applied to file and directory basenames.
    pub patterns_exclude: Option<Vec<String>>,
    /// Pattern interpretation mode.
    pub rule_pattern: EnumMirrorPatternMode,
    /// Do not mutate filesystem; only count what would be copied.
    pub if_dry_run: bool,
}

/// Failure of a mirror run. The walk stops at the first one.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Invalid exclude pattern.
    #[error("Invalid exclude pattern `{pattern}`: {message}")]
    InvalidPattern {
        /// Raw pattern text.
        pattern: String,
        /// Compiler error text.
        message: String,
    },
    /// Source and destination overlap (`src` contains `dst` or vice versa).
    #[error(
        "Source and destination directories overlap: {} <-> {}",
        source_dir.display(),
        destination_dir.display()
    )]
    SourceDestinationOverlap {
        /// Normalized source path.
        source_dir: PathBuf,
        /// Normalized destination path.
        destination_dir: PathBuf,
    },
    /// An I/O step failed on `path`.
    #[error("Failed to {op} {}: {source}", path.display())]
    Io {
        /// Path the operation was applied to.
        path: PathBuf,
        /// Operation kind.
        op: EnumMirrorOp,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

impl MirrorError {
    pub(crate) fn io(path: impl Into<PathBuf>, op: EnumMirrorOp, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            op,
            source,
        }
    }
}

/// Failure while writing the fallback entry file.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Destination root is missing or not a directory.
    #[error("Entry point root is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),
    /// Writing the entry file failed.
    #[error("Failed to write entry point {}: {source}", path.display())]
    Write {
        /// Entry file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::io;

    use super::{EnumMirrorOp, MirrorError};

    #[test]
    fn mirror_error_message_names_operation_and_path() {
        let err = MirrorError::io(
            "/tmp/public/a.txt",
            EnumMirrorOp::CopyFile,
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to copy file /tmp/public/a.txt: denied"
        );
    }
}
