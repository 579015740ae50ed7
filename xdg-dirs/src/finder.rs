//! Layered lookup of files across a base directory and its search list.
//!
//! Candidate roots are the user-specific base directory followed by the
//! search directories, most important first. A candidate matches when
//! `root/suffix` exists as a regular file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::class::FileClass;
use crate::error::{Result, XdgError};
use crate::resolver::BaseDirectories;

/// Candidate roots in precedence order: `home` (if set) then `dirs`.
fn candidate_roots<'a>(
    home: Option<&'a Path>,
    dirs: &'a [PathBuf],
) -> impl Iterator<Item = &'a Path> + 'a {
    home.into_iter().chain(dirs.iter().map(PathBuf::as_path))
}

/// Reject suffixes that would escape the base directory when joined.
pub(crate) fn check_suffix(suffix: &Path) -> Result<()> {
    if suffix.has_root() || suffix.is_absolute() {
        return Err(XdgError::AbsoluteSuffix {
            suffix: suffix.to_path_buf(),
        });
    }
    Ok(())
}

/// Check whether `path` is an existing regular file.
///
/// Absence is not an error; any other failure to stat the path is.
fn probe(path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(metadata) => {
            tracing::trace!(path = %path.display(), is_file = metadata.is_file(), "probe");
            Ok(metadata.is_file())
        }
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            tracing::trace!(path = %path.display(), "probe: not found");
            Ok(false)
        }
        Err(e) => Err(XdgError::probe(path, e)),
    }
}

fn existing<'a>(
    suffix: &'a Path,
    home: Option<&'a Path>,
    dirs: &'a [PathBuf],
) -> impl Iterator<Item = Result<PathBuf>> + 'a {
    candidate_roots(home, dirs).filter_map(move |root| {
        let candidate = root.join(suffix);
        match probe(&candidate) {
            Ok(true) => Some(Ok(candidate)),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    })
}

/// Find every existing `root/suffix`, in candidate root order.
///
/// The first error encountered while probing aborts the search.
pub fn find_all(
    suffix: impl AsRef<Path>,
    home: Option<&Path>,
    dirs: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    let suffix = suffix.as_ref();
    check_suffix(suffix)?;
    existing(suffix, home, dirs).collect()
}

/// Find the first existing `root/suffix`.
///
/// Roots after the first match are not probed.
pub fn find_first(
    suffix: impl AsRef<Path>,
    home: Option<&Path>,
    dirs: &[PathBuf],
) -> Result<Option<PathBuf>> {
    let suffix = suffix.as_ref();
    check_suffix(suffix)?;
    existing(suffix, home, dirs).next().transpose()
}

impl BaseDirectories {
    /// Find the most important existing file of `class` for `suffix`.
    pub fn find_file(
        &self,
        class: FileClass,
        suffix: impl AsRef<Path>,
    ) -> Result<Option<PathBuf>> {
        find_first(suffix, self.home_for(class), self.dirs_for(class))
    }

    /// Find all existing files of `class` for `suffix`, most important first.
    pub fn find_files(
        &self,
        class: FileClass,
        suffix: impl AsRef<Path>,
    ) -> Result<Vec<PathBuf>> {
        find_all(suffix, self.home_for(class), self.dirs_for(class))
    }

    pub fn find_config_file(&self, suffix: impl AsRef<Path>) -> Result<Option<PathBuf>> {
        self.find_file(FileClass::Config, suffix)
    }

    pub fn find_config_files(&self, suffix: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        self.find_files(FileClass::Config, suffix)
    }

    pub fn find_data_file(&self, suffix: impl AsRef<Path>) -> Result<Option<PathBuf>> {
        self.find_file(FileClass::Data, suffix)
    }

    pub fn find_data_files(&self, suffix: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        self.find_files(FileClass::Data, suffix)
    }

    /// Find a file in the cache directory only.
    pub fn find_cache_file(&self, suffix: impl AsRef<Path>) -> Result<Option<PathBuf>> {
        self.find_file(FileClass::Cache, suffix)
    }

    /// Find a file in the runtime directory only.
    pub fn find_runtime_file(&self, suffix: impl AsRef<Path>) -> Result<Option<PathBuf>> {
        self.find_file(FileClass::Runtime, suffix)
    }
}
