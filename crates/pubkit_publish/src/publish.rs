//! Ordered publish run: source check, publish root, mirror, entry point.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use pubkit_io_fs::{
    EnumEntryPointOutcome, MirrorError, ReportMirror, ScaffoldError, ensure_entry_point,
    mirror_tree, plan_entry_point,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::conf::SpecPublishConfig;

/// Steps of one publish run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumPublishState {
    CheckSourceExists,
    EnsurePublishRoot,
    Mirror,
    EnsureEntryPoint,
    Done,
}

impl fmt::Display for EnumPublishState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let txt = match self {
            Self::CheckSourceExists => "check-source",
            Self::EnsurePublishRoot => "ensure-publish-root",
            Self::Mirror => "mirror",
            Self::EnsureEntryPoint => "ensure-entry-point",
            Self::Done => "done",
        };
        f.write_str(txt)
    }
}

/// Fatal failure of a publish run.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Build output directory is missing: the build step has not run.
    #[error("{} does not exist. Run the build first.", path.display())]
    SourceMissing {
        /// Expected build output directory.
        path: PathBuf,
    },
    /// Publish root could not be created.
    #[error("Failed to create publish directory {}: {source}", path.display())]
    PublishRootInitFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Entry point template override could not be read.
    #[error("Failed to read entry point template {}: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Mirror(#[from] MirrorError),
    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),
}

/// Outcome of a successful publish run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPublish {
    pub report_mirror: ReportMirror,
    pub entry_point: EnumEntryPointOutcome,
}

/// Prepare the publish directory described by `spec_publish_conf`.
///
/// The source check runs before anything touches the destination, so a
/// missing build output leaves the filesystem unchanged.
pub fn prepare_publish(
    spec_publish_conf: &SpecPublishConfig,
) -> Result<ReportPublish, PublishError> {
    let dir_src = &spec_publish_conf.dir_source;
    let dir_dst = &spec_publish_conf.dir_destination;
    let if_dry_run = spec_publish_conf.spec_mirror_options.if_dry_run;

    enter_state(EnumPublishState::CheckSourceExists, if_dry_run);
    if !dir_src.is_dir() {
        return Err(PublishError::SourceMissing {
            path: dir_src.clone(),
        });
    }

    enter_state(EnumPublishState::EnsurePublishRoot, if_dry_run);
    if !if_dry_run {
        fs::create_dir_all(dir_dst).map_err(|e| PublishError::PublishRootInitFailed {
            path: dir_dst.clone(),
            source: e,
        })?;
    }

    enter_state(EnumPublishState::Mirror, if_dry_run);
    info!("Copying {} to {}...", dir_src.display(), dir_dst.display());
    let report_mirror = mirror_tree(dir_src, dir_dst, &spec_publish_conf.spec_mirror_options)?;
    info!("{report_mirror}");

    enter_state(EnumPublishState::EnsureEntryPoint, if_dry_run);
    let entry_point = if if_dry_run {
        plan_entry_point(dir_dst)?
    } else {
        ensure_entry_point(dir_dst, &spec_publish_conf.template_content)?
    };
    match entry_point {
        EnumEntryPointOutcome::Created => info!("Created fallback index.html"),
        EnumEntryPointOutcome::WouldCreate => info!("Would create fallback index.html"),
        EnumEntryPointOutcome::Existing => info!("Keeping existing index.html"),
    }

    enter_state(EnumPublishState::Done, if_dry_run);
    Ok(ReportPublish {
        report_mirror,
        entry_point,
    })
}

fn enter_state(state: EnumPublishState, if_dry_run: bool) {
    debug!(%state, dry_run = if_dry_run, "publish state");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use pubkit_io_fs::{ENTRY_POINT_FILE_NAME, EnumEntryPointOutcome};
    use tempfile::TempDir;

    use super::{PublishError, prepare_publish};
    use crate::conf::{C_ENTRY_POINT_TEMPLATE, SpecPublishConfig};

    fn write_text(path: &Path, txt: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, txt).expect("write text");
    }

    #[test]
    fn prepare_publish_mirrors_and_scaffolds() {
        let tmp = TempDir::new().expect("tempdir");
        let spec_publish_conf = SpecPublishConfig::from_project_root(tmp.path());
        write_text(&spec_publish_conf.dir_source.join("a.txt"), "hi");
        write_text(&spec_publish_conf.dir_source.join("sub/b.txt"), "bye");

        let report = prepare_publish(&spec_publish_conf).expect("publish");

        let dir_dst = &spec_publish_conf.dir_destination;
        assert_eq!(fs::read_to_string(dir_dst.join("a.txt")).expect("a"), "hi");
        assert_eq!(fs::read_to_string(dir_dst.join("sub/b.txt")).expect("b"), "bye");
        assert_eq!(
            fs::read_to_string(dir_dst.join(ENTRY_POINT_FILE_NAME)).expect("index"),
            C_ENTRY_POINT_TEMPLATE
        );
        assert_eq!(report.entry_point, EnumEntryPointOutcome::Created);
        assert_eq!(report.report_mirror.cnt_files_copied, 2);
    }

    #[test]
    fn prepare_publish_missing_source_writes_nothing() {
        let tmp = TempDir::new().expect("tempdir");
        let spec_publish_conf = SpecPublishConfig::from_project_root(tmp.path());

        let err = prepare_publish(&spec_publish_conf).expect_err("must fail");

        assert!(matches!(err, PublishError::SourceMissing { .. }));
        assert!(err.to_string().contains("Run the build first"));
        assert!(!spec_publish_conf.dir_destination.exists());
    }

    #[test]
    fn prepare_publish_source_is_file_counts_as_missing() {
        let tmp = TempDir::new().expect("tempdir");
        let spec_publish_conf = SpecPublishConfig::from_project_root(tmp.path());
        write_text(&spec_publish_conf.dir_source, "not a directory");

        let err = prepare_publish(&spec_publish_conf).expect_err("must fail");
        assert!(matches!(err, PublishError::SourceMissing { .. }));
    }

    #[test]
    fn prepare_publish_dry_run_leaves_destination_absent() {
        let tmp = TempDir::new().expect("tempdir");
        let mut spec_publish_conf = SpecPublishConfig::from_project_root(tmp.path());
        spec_publish_conf.spec_mirror_options.if_dry_run = true;
        write_text(&spec_publish_conf.dir_source.join("a.txt"), "hi");

        let report = prepare_publish(&spec_publish_conf).expect("publish");

        assert!(!spec_publish_conf.dir_destination.exists());
        assert_eq!(report.entry_point, EnumEntryPointOutcome::WouldCreate);
        assert_eq!(report.report_mirror.cnt_files_copied, 1);
    }

    #[test]
    fn prepare_publish_keeps_entry_point_shipped_by_build() {
        let tmp = TempDir::new().expect("tempdir");
        let spec_publish_conf = SpecPublishConfig::from_project_root(tmp.path());
        write_text(&spec_publish_conf.dir_source.join("index.html"), "built");

        let report = prepare_publish(&spec_publish_conf).expect("publish");

        assert_eq!(report.entry_point, EnumEntryPointOutcome::Existing);
        assert_eq!(
            fs::read_to_string(spec_publish_conf.dir_destination.join("index.html"))
                .expect("index"),
            "built"
        );
    }
}
