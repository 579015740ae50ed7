//! Merging of every matching file through a caller-supplied callback.
//!
//! The library never reads file contents itself; the callback receives each
//! absolute path in turn and decides what to do with it.
//!
//! # Order
//!
//! - [`MergeOrder::Forward`] visits the most important file first (home, then
//!   the search directories in order). Use it to find the effective value and
//!   stop with [`MergeStep::Stop`].
//! - [`MergeOrder::Backward`] visits the least important file first and the
//!   home file last, so later files override earlier ones when the callback
//!   accumulates state.
//!
//! # Example
//!
//! ```no_run
//! use xdg_dirs::{BaseDirectories, MergeStep};
//!
//! let dirs = BaseDirectories::from_env();
//! let mut settings = Vec::new();
//! dirs.merge_config_files_reverse("app/settings.conf", |path| {
//!     match std::fs::read_to_string(path) {
//!         Ok(text) => {
//!             settings.push(text);
//!             MergeStep::Continue
//!         }
//!         Err(e) => MergeStep::Fail(e),
//!     }
//! })?;
//! # Ok::<(), xdg_dirs::MergeError<std::io::Error>>(())
//! ```

use std::path::{Path, PathBuf};

use crate::class::FileClass;
use crate::error::MergeError;
use crate::finder::find_all;
use crate::resolver::BaseDirectories;

/// Outcome of a merge callback for a single file.
#[derive(Debug)]
pub enum MergeStep<E> {
    /// Go on with the next file.
    Continue,
    /// Skip the remaining files; the merge succeeds.
    Stop,
    /// Abort the merge with an error.
    Fail(E),
}

impl<E> From<Result<(), E>> for MergeStep<E> {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Continue,
            Err(e) => Self::Fail(e),
        }
    }
}

/// Direction in which matching files are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeOrder {
    /// Most important first.
    #[default]
    Forward,
    /// Least important first, home last.
    Backward,
}

/// Run `callback` over `paths` until it stops or fails.
fn drive<E, F>(paths: Vec<PathBuf>, mut callback: F) -> Result<(), MergeError<E>>
where
    F: FnMut(&Path) -> MergeStep<E>,
{
    let total = paths.len();
    for (index, path) in paths.iter().enumerate() {
        match callback(path.as_path()) {
            MergeStep::Continue => {}
            MergeStep::Stop => {
                tracing::debug!(
                    path = %path.display(),
                    skipped = total - index - 1,
                    "Merge stopped by callback"
                );
                return Ok(());
            }
            MergeStep::Fail(e) => {
                tracing::debug!(path = %path.display(), "Merge aborted by callback");
                return Err(MergeError::Callback(e));
            }
        }
    }
    Ok(())
}

/// Visit every existing `root/suffix` in the given order.
pub fn merge<E, F>(
    suffix: impl AsRef<Path>,
    home: Option<&Path>,
    dirs: &[PathBuf],
    order: MergeOrder,
    callback: F,
) -> Result<(), MergeError<E>>
where
    F: FnMut(&Path) -> MergeStep<E>,
{
    let mut paths = find_all(suffix, home, dirs)?;
    if order == MergeOrder::Backward {
        paths.reverse();
    }
    drive(paths, callback)
}

/// Visit matching files most important first.
pub fn merge_forward<E, F>(
    suffix: impl AsRef<Path>,
    home: Option<&Path>,
    dirs: &[PathBuf],
    callback: F,
) -> Result<(), MergeError<E>>
where
    F: FnMut(&Path) -> MergeStep<E>,
{
    merge(suffix, home, dirs, MergeOrder::Forward, callback)
}

/// Visit matching files least important first, home last.
pub fn merge_backward<E, F>(
    suffix: impl AsRef<Path>,
    home: Option<&Path>,
    dirs: &[PathBuf],
    callback: F,
) -> Result<(), MergeError<E>>
where
    F: FnMut(&Path) -> MergeStep<E>,
{
    merge(suffix, home, dirs, MergeOrder::Backward, callback)
}

impl BaseDirectories {
    /// Visit all files of `class` matching `suffix` in `order`.
    pub fn merge_files<E, F>(
        &self,
        class: FileClass,
        suffix: impl AsRef<Path>,
        order: MergeOrder,
        callback: F,
    ) -> Result<(), MergeError<E>>
    where
        F: FnMut(&Path) -> MergeStep<E>,
    {
        merge(
            suffix,
            self.home_for(class),
            self.dirs_for(class),
            order,
            callback,
        )
    }

    pub fn merge_config_files<E, F>(
        &self,
        suffix: impl AsRef<Path>,
        callback: F,
    ) -> Result<(), MergeError<E>>
    where
        F: FnMut(&Path) -> MergeStep<E>,
    {
        self.merge_files(FileClass::Config, suffix, MergeOrder::Forward, callback)
    }

    pub fn merge_config_files_reverse<E, F>(
        &self,
        suffix: impl AsRef<Path>,
        callback: F,
    ) -> Result<(), MergeError<E>>
    where
        F: FnMut(&Path) -> MergeStep<E>,
    {
        self.merge_files(FileClass::Config, suffix, MergeOrder::Backward, callback)
    }

    pub fn merge_data_files<E, F>(
        &self,
        suffix: impl AsRef<Path>,
        callback: F,
    ) -> Result<(), MergeError<E>>
    where
        F: FnMut(&Path) -> MergeStep<E>,
    {
        self.merge_files(FileClass::Data, suffix, MergeOrder::Forward, callback)
    }

    pub fn merge_data_files_reverse<E, F>(
        &self,
        suffix: impl AsRef<Path>,
        callback: F,
    ) -> Result<(), MergeError<E>>
    where
        F: FnMut(&Path) -> MergeStep<E>,
    {
        self.merge_files(FileClass::Data, suffix, MergeOrder::Backward, callback)
    }
}
