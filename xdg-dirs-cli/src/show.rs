//! Show the resolved base directories.

use std::path::{Path, PathBuf};

use comfy_table::{presets::UTF8_FULL, Table};
use xdg_dirs::BaseDirectories;

const UNSET: &str = "(unset)";

fn scalar(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| UNSET.to_string())
}

fn list(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return UNSET.to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the layout as a table followed by any diagnostics.
pub fn render_text(dirs: &BaseDirectories) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Variable", "Resolved"]);
    table.add_row(vec!["HOME".to_string(), scalar(dirs.home())]);
    table.add_row(vec!["XDG_CONFIG_HOME".to_string(), scalar(dirs.config_home())]);
    table.add_row(vec!["XDG_DATA_HOME".to_string(), scalar(dirs.data_home())]);
    table.add_row(vec!["XDG_CACHE_HOME".to_string(), scalar(dirs.cache_home())]);
    table.add_row(vec!["XDG_RUNTIME_DIR".to_string(), scalar(dirs.runtime_dir())]);
    table.add_row(vec!["XDG_CONFIG_DIRS".to_string(), list(dirs.config_dirs())]);
    table.add_row(vec!["XDG_DATA_DIRS".to_string(), list(dirs.data_dirs())]);

    let mut out = table.to_string();
    if !dirs.diagnostics().is_empty() {
        out.push_str("\n\nDiagnostics:");
        for diagnostic in dirs.diagnostics() {
            out.push_str(&format!("\n  - {}", diagnostic));
        }
    }
    out
}

/// Render the layout as pretty-printed JSON.
pub fn render_json(dirs: &BaseDirectories) -> serde_json::Result<String> {
    serde_json::to_string_pretty(dirs)
}

/// Run the show command.
pub fn run_show(dirs: &BaseDirectories, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", render_json(dirs)?);
    } else {
        println!("{}", render_text(dirs));
    }
    Ok(())
}
