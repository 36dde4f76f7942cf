//! `pubkit_io_fs`:
//! filesystem engine behind publish-directory preparation.
//!
//! - `mirror`   : one-way recursive tree mirror
//! - `scaffold` : create-if-absent entry point file
//! - `spec`     : enums/options/errors
//! - `report`   : run-time report model
//! - `util`     : exclude patterns and path helpers

pub mod mirror;
pub mod report;
pub mod scaffold;
pub mod spec;
mod util;

pub use mirror::mirror_tree;
pub use report::{ReportMirror, ReportMirrorBuilder};
pub use scaffold::{ENTRY_POINT_FILE_NAME, ensure_entry_point, plan_entry_point};
pub use spec::{
    EnumEntryPointOutcome, EnumMirrorOp, EnumMirrorPatternMode, MirrorError, ScaffoldError,
    SpecMirrorOptions,
};
