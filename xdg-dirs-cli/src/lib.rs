//! xdg-dirs command-line interface.
//!
//! Thin commands over the `xdg_dirs` library:
//! - `show`: print the resolved layout and diagnostics
//! - `find`: print the effective file (or all matches) for a relative path
//! - `merge`: deep-merge every matching YAML file, most specific last
//! - `place`: print the write location for a file, creating leading directories

pub mod cli;
pub mod environment;
pub mod lookup;
pub mod merge;
pub mod show;

pub use cli::{ClassArg, Cli, Commands};
