use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use regex::Regex;

use crate::spec::{EnumMirrorPatternMode, MirrorError};

////////////////////////////////////////////////////////////////////////////////
// #region PatternMatching

#[derive(Debug, Clone)]
pub(crate) enum TypeMirrorPatternSeq {
    Literal(Vec<String>),
    Glob(Vec<GlobMatcher>),
    Regex(Vec<Regex>),
}

impl TypeMirrorPatternSeq {
    /// Compile raw exclude patterns. `None` when there is nothing to match.
    pub(crate) fn compile(
        patterns: Option<&[String]>,
        rule_pattern: EnumMirrorPatternMode,
    ) -> Result<Option<Self>, MirrorError> {
        let Some(patterns) = patterns else {
            return Ok(None);
        };
        if patterns.is_empty() {
            return Ok(None);
        }

        let err_invalid = |pattern: &String, message: String| MirrorError::InvalidPattern {
            pattern: pattern.clone(),
            message,
        };

        match rule_pattern {
            EnumMirrorPatternMode::Literal => Ok(Some(Self::Literal(patterns.to_vec()))),
            EnumMirrorPatternMode::Glob => {
                let mut l_glob = Vec::with_capacity(patterns.len());
                for pattern in patterns {
                    let matcher = Glob::new(pattern)
                        .map_err(|e| err_invalid(pattern, e.to_string()))?
                        .compile_matcher();
                    l_glob.push(matcher);
                }
                Ok(Some(Self::Glob(l_glob)))
            }
            EnumMirrorPatternMode::Regex => {
                let mut l_regex = Vec::with_capacity(patterns.len());
                for pattern in patterns {
                    let regex =
                        Regex::new(pattern).map_err(|e| err_invalid(pattern, e.to_string()))?;
                    l_regex.push(regex);
                }
                Ok(Some(Self::Regex(l_regex)))
            }
        }
    }

    pub(crate) fn is_match(&self, value: &str) -> bool {
        match self {
            Self::Literal(v) => v.iter().any(|p| value.contains(p.as_str())),
            Self::Glob(v) => v.iter().any(|p| p.is_match(value)),
            Self::Regex(v) => v.iter().any(|p| p.is_match(value)),
        }
    }
}

pub(crate) fn should_exclude(value: &str, patterns_exclude: Option<&TypeMirrorPatternSeq>) -> bool {
    patterns_exclude.is_some_and(|p| p.is_match(value))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PathUtilities

/// Canonicalize the deepest existing ancestor and re-append the missing tail.
fn _normalize_path(path: &Path) -> PathBuf {
    let path_abs = _absolutize_path(path);
    let mut l_tail: Vec<&OsStr> = Vec::new();
    let mut path_cursor = path_abs.as_path();
    loop {
        if let Ok(resolved) = fs::canonicalize(path_cursor) {
            return l_tail.iter().rev().fold(resolved, |acc, part| acc.join(part));
        }
        match (path_cursor.parent(), path_cursor.file_name()) {
            (Some(parent), Some(name)) => {
                l_tail.push(name);
                path_cursor = parent;
            }
            _ => return path_abs.clone(),
        }
    }
}

fn _absolutize_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(path)
}

/// Whether `dst` lies inside (or equals) `src` once resolved.
///
/// A source below the destination is fine: the walk never writes into the
/// subtree it reads from at the same depth.
pub(crate) fn is_overlap(src: &Path, dst: &Path) -> bool {
    let src_resolved = _normalize_path(src);
    let dst_resolved = _normalize_path(dst);
    dst_resolved.starts_with(&src_resolved)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
