//! Error types for base directory lookups.

use std::path::PathBuf;
use thiserror::Error;

use crate::class::FileClass;

/// Result type alias using XdgError.
pub type Result<T> = std::result::Result<T, XdgError>;

/// Errors that can occur while looking up or opening files in base directories.
///
/// Resolution itself never fails; rejected environment values are recorded as
/// [`Diagnostic`](crate::Diagnostic)s instead.
#[derive(Error, Debug)]
pub enum XdgError {
    /// Probing a candidate failed for a reason other than absence.
    #[error("failed to probe '{path}': {source}")]
    Probe {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open or create a file.
    #[error("failed to open file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create leading directories for a file.
    #[error("failed to create directory '{path}': {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The lookup suffix must be relative to the base directories.
    #[error("path '{suffix}' must be relative to the base directory")]
    AbsoluteSuffix { suffix: PathBuf },

    /// No base directory could be resolved for the file class.
    #[error("no {class} base directory is set ({})", .class.env_var())]
    NoBaseDirectory { class: FileClass },

    /// The runtime directory is configured but does not exist.
    #[error("runtime directory '{path}' does not exist")]
    RuntimeDirMissing { path: PathBuf },
}

impl XdgError {
    /// Create a Probe error.
    pub fn probe(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Probe {
            path: path.into(),
            source,
        }
    }

    /// Create an Open error.
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a DirectoryCreation error.
    pub fn directory_creation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.into(),
            source,
        }
    }
}

/// Error returned by the merge operations.
///
/// `E` is the error type carried by [`MergeStep::Fail`](crate::MergeStep::Fail).
#[derive(Error, Debug)]
pub enum MergeError<E> {
    /// Enumerating the candidate files failed.
    #[error(transparent)]
    Lookup(#[from] XdgError),

    /// The callback aborted the merge.
    #[error("merge callback failed: {0}")]
    Callback(#[source] E),
}

impl<E> MergeError<E> {
    /// The callback error, if the merge was aborted by the callback.
    pub fn into_callback(self) -> Option<E> {
        match self {
            Self::Callback(e) => Some(e),
            Self::Lookup(_) => None,
        }
    }
}
