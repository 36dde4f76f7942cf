//! Command-line surface for `pubkit`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pubkit_io_fs::EnumMirrorPatternMode;

use crate::conf::SpecPublishConfig;
use crate::publish::PublishError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArgPatternMode {
    Glob,
    Regex,
    Literal,
}

impl From<ArgPatternMode> for EnumMirrorPatternMode {
    fn from(value: ArgPatternMode) -> Self {
        match value {
            ArgPatternMode::Glob => Self::Glob,
            ArgPatternMode::Regex => Self::Regex,
            ArgPatternMode::Literal => Self::Literal,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "pubkit",
    version,
    about = "Copy a static web build into the publish directory"
)]
pub struct Cli {
    #[arg(
        long,
        default_value = ".",
        help = "Project root (contains src/gui/dist and public/)"
    )]
    pub project_root: PathBuf,

    #[arg(long, help = "Build output directory [default: <project-root>/src/gui/dist]")]
    pub source: Option<PathBuf>,

    #[arg(long, help = "Publish directory [default: <project-root>/public]")]
    pub destination: Option<PathBuf>,

    #[arg(long, help = "File whose content replaces the built-in index.html template")]
    pub template: Option<PathBuf>,

    #[arg(
        long = "exclude",
        value_name = "PATTERN",
        help = "Skip entries whose name matches (repeatable)"
    )]
    pub patterns_exclude: Vec<String>,

    #[arg(long, value_enum, default_value_t = ArgPatternMode::Glob)]
    pub pattern_mode: ArgPatternMode,

    #[arg(long, help = "Report what would be copied without writing")]
    pub dry_run: bool,

    #[arg(long, short = 'v', help = "Log every copied file")]
    pub verbose: bool,
}

impl Cli {
    /// Resolve flags into a run config. Reads the template override, if any.
    pub fn into_config(self) -> Result<SpecPublishConfig, PublishError> {
        let mut spec_publish_conf = SpecPublishConfig::from_project_root(&self.project_root);
        if let Some(dir_source) = self.source {
            spec_publish_conf.dir_source = dir_source;
        }
        if let Some(dir_destination) = self.destination {
            spec_publish_conf.dir_destination = dir_destination;
        }
        if let Some(path_template) = self.template {
            spec_publish_conf = spec_publish_conf.with_template_file(path_template)?;
        }

        let spec_mirror_options = &mut spec_publish_conf.spec_mirror_options;
        if !self.patterns_exclude.is_empty() {
            spec_mirror_options.patterns_exclude = Some(self.patterns_exclude);
        }
        spec_mirror_options.rule_pattern = self.pattern_mode.into();
        spec_mirror_options.if_dry_run = self.dry_run;
        Ok(spec_publish_conf)
    }
}
