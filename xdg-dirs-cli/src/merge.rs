//! The merge command: layered YAML configuration across base directories.
//!
//! Files are visited least important first and deep-merged, so a key in the
//! user's file overrides the same key from a system directory. Mappings merge
//! key by key; any other value replaces what was there.

use std::path::{Path, PathBuf};

use serde_yaml::Value;
use thiserror::Error;
use xdg_dirs::{BaseDirectories, FileClass, MergeError, MergeOrder, MergeStep};

use crate::lookup::NOT_FOUND_EXIT_CODE;

/// Errors raised while reading a candidate file.
#[derive(Error, Debug)]
pub enum MergeFileError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

fn load(path: &Path) -> Result<Value, MergeFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| MergeFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| MergeFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Deep-merge `overlay` into `base`.
pub fn merge_values(base: &mut Value, overlay: Value) {
    if let Value::Mapping(base_map) = base {
        if let Value::Mapping(overlay_map) = overlay {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
            return;
        }
    }
    *base = overlay;
}

/// Merge every matching file, lowest precedence first.
///
/// Returns `None` when no file matched. Empty documents are skipped.
pub fn merge_layered(
    dirs: &BaseDirectories,
    class: FileClass,
    suffix: &Path,
) -> Result<Option<Value>, MergeError<MergeFileError>> {
    let mut merged: Option<Value> = None;
    dirs.merge_files(class, suffix, MergeOrder::Backward, |path| {
        match load(path) {
            Ok(Value::Null) => {
                tracing::debug!(path = %path.display(), "Skipping empty document");
            }
            Ok(value) => {
                tracing::debug!(path = %path.display(), "Merging");
                merge_values(merged.get_or_insert(Value::Null), value);
            }
            Err(e) => return MergeStep::Fail(e),
        }
        MergeStep::Continue
    })?;
    Ok(merged)
}

/// The most important file that parses as a non-empty YAML document.
///
/// Unreadable or invalid files are skipped with a warning.
pub fn first_parsable(
    dirs: &BaseDirectories,
    class: FileClass,
    suffix: &Path,
) -> Result<Option<(PathBuf, Value)>, MergeError<MergeFileError>> {
    let mut found = None;
    dirs.merge_files(class, suffix, MergeOrder::Forward, |path| {
        match load(path) {
            Ok(Value::Null) => MergeStep::Continue,
            Ok(value) => {
                found = Some((path.to_path_buf(), value));
                MergeStep::Stop
            }
            Err(e) => {
                tracing::warn!("{}", e);
                MergeStep::Continue
            }
        }
    })?;
    Ok(found)
}

/// Run the merge command, printing the resulting YAML document.
pub fn run_merge(
    dirs: &BaseDirectories,
    class: FileClass,
    suffix: &Path,
    first: bool,
) -> anyhow::Result<i32> {
    let value = if first {
        first_parsable(dirs, class, suffix)?.map(|(path, value)| {
            tracing::info!(path = %path.display(), "Using first parsable file");
            value
        })
    } else {
        merge_layered(dirs, class, suffix)?
    };

    match value {
        Some(value) => {
            print!("{}", serde_yaml::to_string(&value)?);
            Ok(0)
        }
        None => {
            eprintln!("{}: no {} file to merge", suffix.display(), class);
            Ok(NOT_FOUND_EXIT_CODE)
        }
    }
}
