//! Publish layout constants and config presets.

use std::fs;
use std::path::{Path, PathBuf};

use pubkit_io_fs::SpecMirrorOptions;

use crate::publish::PublishError;

/// Build output location, relative to the project root.
pub const TUP_SOURCE_DIR_SEGMENTS: [&str; 3] = ["src", "gui", "dist"];
/// Publish location, relative to the project root.
pub const C_PUBLISH_DIR_NAME: &str = "public";

/// Fallback page written when the publish root has no `index.html`.
pub const C_ENTRY_POINT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Puter</title>
    <link rel="stylesheet" href="/bundle.min.css">
</head>
<body>
    <script>window.puter_gui_enabled = true;</script>
    <script src="/gui.js"></script>
    <script src="/bundle.min.js"></script>
    <script>
        window.addEventListener('load', function() {
            if (typeof gui === 'function') {
                gui();
            }
        });
    </script>
</body>
</html>"#;

/// Everything one publish run needs.
#[derive(Debug, Clone)]
pub struct SpecPublishConfig {
    /// Build output tree to mirror.
    pub dir_source: PathBuf,
    /// Publish root that receives the mirror and the entry point.
    pub dir_destination: PathBuf,
    /// Content written to `index.html` when it is absent.
    pub template_content: String,
    /// Options forwarded to the tree mirror. `if_dry_run` also gates the
    /// publish root and entry point writes.
    pub spec_mirror_options: SpecMirrorOptions,
}

impl SpecPublishConfig {
    /// Standard layout under `dir_project_root` with the built-in template.
    pub fn from_project_root<P>(dir_project_root: P) -> Self
    where
        P: AsRef<Path>,
    {
        let dir_project_root = dir_project_root.as_ref();
        let dir_source = TUP_SOURCE_DIR_SEGMENTS
            .iter()
            .fold(dir_project_root.to_path_buf(), |acc, part| acc.join(part));
        Self {
            dir_source,
            dir_destination: dir_project_root.join(C_PUBLISH_DIR_NAME),
            template_content: C_ENTRY_POINT_TEMPLATE.to_string(),
            spec_mirror_options: SpecMirrorOptions::default(),
        }
    }

    /// Replace the entry point template with the content of `path_template`.
    pub fn with_template_file<P>(mut self, path_template: P) -> Result<Self, PublishError>
    where
        P: AsRef<Path>,
    {
        let path_template = path_template.as_ref();
        self.template_content =
            fs::read_to_string(path_template).map_err(|e| PublishError::Template {
                path: path_template.to_path_buf(),
                source: e,
            })?;
        Ok(self)
    }
}
