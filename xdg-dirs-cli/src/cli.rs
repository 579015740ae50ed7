//! CLI definition for the xdg-dirs command-line interface.
//!
//! This module only depends on `clap`, `std` and the library's `FileClass`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use xdg_dirs::FileClass;

/// File class argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClassArg {
    /// Configuration files (XDG_CONFIG_HOME, XDG_CONFIG_DIRS)
    Config,
    /// Data files (XDG_DATA_HOME, XDG_DATA_DIRS)
    Data,
    /// Cached data (XDG_CACHE_HOME)
    Cache,
    /// Runtime files (XDG_RUNTIME_DIR)
    Runtime,
}

impl From<ClassArg> for FileClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Config => FileClass::Config,
            ClassArg::Data => FileClass::Data,
            ClassArg::Cache => FileClass::Cache,
            ClassArg::Runtime => FileClass::Runtime,
        }
    }
}

impl std::fmt::Display for ClassArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", FileClass::from(*self))
    }
}

/// xdg-dirs - XDG base directory lookup
///
/// Resolves the XDG base directories from the environment and finds files
/// across them with the standard precedence.
#[derive(Parser, Debug)]
#[command(name = "xdg-dirs")]
#[command(version)]
#[command(about = "Resolve XDG base directories and look up files across them")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Resolve from an empty environment instead of the process environment
    #[arg(long, global = true)]
    pub clear_env: bool,

    /// Override an environment variable before resolution (repeatable)
    #[arg(
        short = 'e',
        long = "env",
        value_name = "KEY=VALUE",
        value_parser = parse_key_value,
        global = true
    )]
    pub env: Vec<(String, String)>,

    /// Exit with status 2 if resolution recorded any diagnostic
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved base directories and diagnostics
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find the effective file for a relative path
    Find {
        /// File class to search
        #[arg(value_enum)]
        class: ClassArg,
        /// Path relative to the base directories (e.g. myapp/config.yaml)
        suffix: PathBuf,
        /// Print every match, most important first
        #[arg(long)]
        all: bool,
    },
    /// Merge all matching YAML files, more specific files overriding
    Merge {
        /// File class to search
        #[arg(value_enum)]
        class: ClassArg,
        /// Path relative to the base directories
        suffix: PathBuf,
        /// Print only the most important file that parses
        #[arg(long)]
        first: bool,
    },
    /// Print the write location for a file, creating leading directories
    Place {
        /// File class to place the file in
        #[arg(value_enum)]
        class: ClassArg,
        /// Path relative to the base directory
        suffix: PathBuf,
    },
}

/// Parse a `KEY=VALUE` pair. The value may be empty.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}
