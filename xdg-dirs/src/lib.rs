//! XDG base directory resolution and layered file lookup.
//!
//! This crate resolves the directories an application should use for
//! configuration, data, cache and runtime files from `HOME` and the `XDG_*`
//! environment variables, then looks files up across those directories with
//! precedence: the user-specific base directory first, the system search
//! directories after it.
//!
//! # Overview
//!
//! - [`BaseDirectories`] - the resolved layout, plus the [`Diagnostic`]s
//!   recorded for rejected environment values
//! - [`Environment`] - the input to resolution ([`ProcessEnvironment`] or a
//!   frozen [`EnvSnapshot`])
//! - [`find_first`] / [`find_all`] - lookup over a base directory and a list
//! - [`merge_forward`] / [`merge_backward`] - visit every match through a
//!   callback returning a [`MergeStep`]
//!
//! # Example
//!
//! ```no_run
//! use xdg_dirs::BaseDirectories;
//!
//! let dirs = BaseDirectories::from_env();
//! for diagnostic in dirs.diagnostics() {
//!     eprintln!("warning: {}", diagnostic);
//! }
//!
//! if let Some(path) = dirs.find_config_file("myapp/config.toml")? {
//!     println!("using {}", path.display());
//! }
//! # Ok::<(), xdg_dirs::XdgError>(())
//! ```
//!
//! Resolution never fails. A directory that cannot be resolved is `None` and
//! the reason is available from [`BaseDirectories::diagnostics`].

mod class;
mod env;
mod error;
mod finder;
mod merger;
mod open;
mod path;
mod resolver;

// Re-export main types
pub use class::FileClass;
pub use env::{EnvSnapshot, Environment, ProcessEnvironment, XDG_VARS};
pub use error::{MergeError, Result, XdgError};
pub use finder::{find_all, find_first};
pub use merger::{merge, merge_backward, merge_forward, MergeOrder, MergeStep};
pub use path::is_absolute;
pub use resolver::{BaseDirectories, Diagnostic};
