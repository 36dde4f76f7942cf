//! Create-if-absent entry point scaffolding.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::spec::{EnumEntryPointOutcome, ScaffoldError};

/// File name of the entry point document served at the publish root.
pub const ENTRY_POINT_FILE_NAME: &str = "index.html";

/// Write `template_content` to `<dir_dest_root>/index.html` unless that file
/// already exists. Existing content is never overwritten.
pub fn ensure_entry_point<P>(
    dir_dest_root: P,
    template_content: &str,
) -> Result<EnumEntryPointOutcome, ScaffoldError>
where
    P: AsRef<Path>,
{
    write_entry_point(dir_dest_root.as_ref(), template_content, false)
}

/// Same checks as [`ensure_entry_point`] without writing anything.
pub fn plan_entry_point<P>(dir_dest_root: P) -> Result<EnumEntryPointOutcome, ScaffoldError>
where
    P: AsRef<Path>,
{
    write_entry_point(dir_dest_root.as_ref(), "", true)
}

fn write_entry_point(
    dir_dest_root: &Path,
    template_content: &str,
    if_dry_run: bool,
) -> Result<EnumEntryPointOutcome, ScaffoldError> {
    let path_entry = dir_dest_root.join(ENTRY_POINT_FILE_NAME);
    if path_entry.exists() {
        return Ok(EnumEntryPointOutcome::Existing);
    }
    if if_dry_run {
        return Ok(EnumEntryPointOutcome::WouldCreate);
    }
    if !dir_dest_root.is_dir() {
        return Err(ScaffoldError::RootNotDirectory(dir_dest_root.to_path_buf()));
    }

    // create_new: a file that shows up after the existence check is kept.
    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path_entry)
    {
        Ok(v) => v,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Ok(EnumEntryPointOutcome::Existing);
        }
        Err(e) => {
            return Err(ScaffoldError::Write {
                path: path_entry,
                source: e,
            });
        }
    };
    file.write_all(template_content.as_bytes())
        .map_err(|e| ScaffoldError::Write {
            path: path_entry.clone(),
            source: e,
        })?;

    debug!(path = %path_entry.display(), bytes = template_content.len(), "wrote entry point");
    Ok(EnumEntryPointOutcome::Created)
}
