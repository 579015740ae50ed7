//! Absolute-path validation for environment values.

use std::path::Path;

/// Returns true if `candidate` is a non-empty absolute path.
///
/// This is a purely syntactic check; the path is not required to exist.
/// All paths taken from the `XDG_*` variables must be absolute, relative
/// ones are considered invalid and ignored.
pub fn is_absolute(candidate: &str) -> bool {
    !candidate.is_empty() && Path::new(candidate).is_absolute()
}
