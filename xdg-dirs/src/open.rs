//! Opening and placing files in the base directories.
//!
//! These helpers only decide *which* path to use; the actual open or create is
//! a plain `std::fs` call.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::class::FileClass;
use crate::error::{Result, XdgError};
use crate::finder::check_suffix;
use crate::resolver::BaseDirectories;

impl BaseDirectories {
    /// Path for writing `suffix` of `class`, with leading directories created.
    ///
    /// The file itself is not created. The runtime directory is never created
    /// here; only subdirectories below an existing runtime directory are.
    pub fn place_file(&self, class: FileClass, suffix: impl AsRef<Path>) -> Result<PathBuf> {
        let suffix = suffix.as_ref();
        check_suffix(suffix)?;

        let base = self
            .home_for(class)
            .ok_or(XdgError::NoBaseDirectory { class })?;
        if class == FileClass::Runtime && !base.is_dir() {
            return Err(XdgError::RuntimeDirMissing {
                path: base.to_path_buf(),
            });
        }

        let path = base.join(suffix);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| XdgError::directory_creation(parent, e))?;
        }
        tracing::debug!(class = %class, path = %path.display(), "Placed file");
        Ok(path)
    }

    /// Open the effective file of `class` for `suffix`.
    ///
    /// An existing file is opened read-only. When no candidate exists the file
    /// is created for reading and writing under the class base directory.
    pub fn open_file(&self, class: FileClass, suffix: impl AsRef<Path>) -> Result<File> {
        let suffix = suffix.as_ref();
        if let Some(existing) = self.find_file(class, suffix)? {
            return File::open(&existing).map_err(|e| XdgError::open(&existing, e));
        }

        let path = self.place_file(class, suffix)?;
        tracing::debug!(class = %class, path = %path.display(), "Creating file");
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| XdgError::open(&path, e))
    }

    pub fn place_config_file(&self, suffix: impl AsRef<Path>) -> Result<PathBuf> {
        self.place_file(FileClass::Config, suffix)
    }

    pub fn place_data_file(&self, suffix: impl AsRef<Path>) -> Result<PathBuf> {
        self.place_file(FileClass::Data, suffix)
    }

    pub fn place_cache_file(&self, suffix: impl AsRef<Path>) -> Result<PathBuf> {
        self.place_file(FileClass::Cache, suffix)
    }

    pub fn place_runtime_file(&self, suffix: impl AsRef<Path>) -> Result<PathBuf> {
        self.place_file(FileClass::Runtime, suffix)
    }

    pub fn open_config_file(&self, suffix: impl AsRef<Path>) -> Result<File> {
        self.open_file(FileClass::Config, suffix)
    }

    pub fn open_data_file(&self, suffix: impl AsRef<Path>) -> Result<File> {
        self.open_file(FileClass::Data, suffix)
    }

    pub fn open_cache_file(&self, suffix: impl AsRef<Path>) -> Result<File> {
        self.open_file(FileClass::Cache, suffix)
    }

    pub fn open_runtime_file(&self, suffix: impl AsRef<Path>) -> Result<File> {
        self.open_file(FileClass::Runtime, suffix)
    }
}
