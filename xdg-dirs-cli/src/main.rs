//! xdg-dirs CLI - XDG base directory lookup.
//!
//! Commands:
//! - `xdg-dirs show [--json]`: Print resolved base directories and diagnostics
//! - `xdg-dirs find <class> <path> [--all]`: Print the effective file(s)
//! - `xdg-dirs merge <class> <path> [--first]`: Print merged YAML of all matches
//! - `xdg-dirs place <class> <path>`: Print the write location
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error
//! - 2: No matching file, or diagnostics were recorded with `--strict`

use clap::Parser;
use tracing_subscriber::EnvFilter;

use xdg_dirs::BaseDirectories;
use xdg_dirs_cli::environment::build_environment;
use xdg_dirs_cli::lookup::{run_find, run_place, NOT_FOUND_EXIT_CODE};
use xdg_dirs_cli::merge::run_merge;
use xdg_dirs_cli::show::run_show;
use xdg_dirs_cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("xdg_dirs=debug,xdg_dirs_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = run(cli);
    std::process::exit(exit_code);
}

/// Resolve the layout and dispatch to the command handler.
fn run(cli: Cli) -> i32 {
    let env = build_environment(cli.clear_env, &cli.env);
    let dirs = BaseDirectories::resolve(&env);
    for diagnostic in dirs.diagnostics() {
        tracing::warn!("{}", diagnostic);
    }

    let result = dispatch_command(cli.command, &dirs);
    match result {
        Ok(code) if code == 0 && cli.strict && !dirs.diagnostics().is_empty() => {
            eprintln!(
                "Error: {} diagnostic(s) recorded during resolution",
                dirs.diagnostics().len()
            );
            NOT_FOUND_EXIT_CODE
        }
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn dispatch_command(command: Commands, dirs: &BaseDirectories) -> anyhow::Result<i32> {
    match command {
        Commands::Show { json } => run_show(dirs, json).map(|()| 0),
        Commands::Find { class, suffix, all } => run_find(dirs, class.into(), &suffix, all),
        Commands::Merge {
            class,
            suffix,
            first,
        } => run_merge(dirs, class.into(), &suffix, first),
        Commands::Place { class, suffix } => run_place(dirs, class.into(), &suffix),
    }
}
