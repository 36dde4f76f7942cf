//! One-way recursive mirror of a directory tree.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::report::{ReportMirror, ReportMirrorBuilder};
use crate::spec::{EnumMirrorOp, MirrorError, SpecMirrorOptions};
use crate::util::{TypeMirrorPatternSeq, is_overlap, should_exclude};

#[derive(Debug, Clone)]
struct SpecChildEntry {
    path_src: PathBuf,
    name: OsString,
}

#[derive(Debug)]
struct SpecMirrorContext {
    if_dry_run: bool,
    spec_mirror_pats: Option<TypeMirrorPatternSeq>,
    builder_mirror_report: ReportMirrorBuilder,
}

/// Mirror `path_source` into `path_destination`.
///
/// Directories are recreated (missing intermediate segments included) and
/// every file below the source is copied byte for byte, overwriting whatever
/// sits at the same relative path in the destination. Files that exist only in
/// the destination are never touched. Symlinks are followed: a link to a
/// directory is mirrored as a directory, anything else as a file.
///
/// The source must exist. The first failing filesystem call aborts the walk;
/// entries already copied stay on disk.
pub fn mirror_tree<P, Q>(
    path_source: P,
    path_destination: Q,
    spec_mirror_options: &SpecMirrorOptions,
) -> Result<ReportMirror, MirrorError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_src = path_source.as_ref();
    let path_dst = path_destination.as_ref();

    let spec_mirror_pats = TypeMirrorPatternSeq::compile(
        spec_mirror_options.patterns_exclude.as_deref(),
        spec_mirror_options.rule_pattern,
    )?;
    if is_overlap(path_src, path_dst) {
        return Err(MirrorError::SourceDestinationOverlap {
            source_dir: path_src.to_path_buf(),
            destination_dir: path_dst.to_path_buf(),
        });
    }

    let mut spec_mirror_ctx = SpecMirrorContext {
        if_dry_run: spec_mirror_options.if_dry_run,
        spec_mirror_pats,
        builder_mirror_report: ReportMirrorBuilder::default(),
    };
    mirror_node(path_src, path_dst, &mut spec_mirror_ctx)?;
    Ok(spec_mirror_ctx.builder_mirror_report.build())
}

fn mirror_node(
    path_src: &Path,
    path_dst: &Path,
    spec_mirror_ctx: &mut SpecMirrorContext,
) -> Result<(), MirrorError> {
    let meta_src =
        fs::metadata(path_src).map_err(|e| MirrorError::io(path_src, EnumMirrorOp::Inspect, e))?;

    if meta_src.is_dir() {
        mirror_directory(path_src, path_dst, spec_mirror_ctx)
    } else {
        mirror_file(path_src, path_dst, spec_mirror_ctx)
    }
}

fn mirror_directory(
    path_src: &Path,
    path_dst: &Path,
    spec_mirror_ctx: &mut SpecMirrorContext,
) -> Result<(), MirrorError> {
    spec_mirror_ctx.builder_mirror_report.add_dir_visited();

    if !path_dst.is_dir() {
        if !spec_mirror_ctx.if_dry_run {
            fs::create_dir_all(path_dst)
                .map_err(|e| MirrorError::io(path_dst, EnumMirrorOp::CreateDir, e))?;
        }
        debug!(path = %path_dst.display(), "created directory");
        spec_mirror_ctx.builder_mirror_report.add_dir_created();
    }

    let iter_entries =
        fs::read_dir(path_src).map_err(|e| MirrorError::io(path_src, EnumMirrorOp::ReadDir, e))?;

    let mut l_children: Vec<SpecChildEntry> = Vec::new();
    for _entry_res in iter_entries {
        let entry = _entry_res.map_err(|e| MirrorError::io(path_src, EnumMirrorOp::ReadDir, e))?;
        l_children.push(SpecChildEntry {
            path_src: entry.path(),
            name: entry.file_name(),
        });
    }
    l_children.sort_by(|a, b| a.name.cmp(&b.name));

    for _child in l_children {
        // Patterns see a lossy name; the destination keeps the raw one.
        let name_lossy = _child.name.to_string_lossy();
        if should_exclude(&name_lossy, spec_mirror_ctx.spec_mirror_pats.as_ref()) {
            debug!(path = %_child.path_src.display(), "excluded");
            spec_mirror_ctx.builder_mirror_report.add_excluded();
            continue;
        }
        let path_dst_child = path_dst.join(&_child.name);
        mirror_node(&_child.path_src, &path_dst_child, spec_mirror_ctx)?;
    }

    Ok(())
}

fn mirror_file(
    path_src: &Path,
    path_dst: &Path,
    spec_mirror_ctx: &mut SpecMirrorContext,
) -> Result<(), MirrorError> {
    let n_bytes = if spec_mirror_ctx.if_dry_run {
        fs::metadata(path_src)
            .map_err(|e| MirrorError::io(path_src, EnumMirrorOp::Inspect, e))?
            .len()
    } else {
        fs::copy(path_src, path_dst)
            .map_err(|e| MirrorError::io(path_dst, EnumMirrorOp::CopyFile, e))?
    };
    debug!(
        src = %path_src.display(),
        dst = %path_dst.display(),
        bytes = n_bytes,
        "copied file"
    );
    spec_mirror_ctx.builder_mirror_report.add_file_copied(n_bytes);
    Ok(())
}
