//! `pubkit_publish`:
//! publish-directory preparation on top of `pubkit_io_fs`.
//!
//! - `conf`    : layout constants, default template, run config
//! - `publish` : ordered run and its error taxonomy
//! - `cli`     : command-line flags to run config

pub mod cli;
pub mod conf;
pub mod publish;

pub use cli::{ArgPatternMode, Cli};
pub use conf::{
    C_ENTRY_POINT_TEMPLATE, C_PUBLISH_DIR_NAME, SpecPublishConfig, TUP_SOURCE_DIR_SEGMENTS,
};
pub use publish::{EnumPublishState, PublishError, ReportPublish, prepare_publish};
