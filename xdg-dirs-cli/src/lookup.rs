//! The find and place commands.

use std::path::{Path, PathBuf};

use xdg_dirs::{BaseDirectories, FileClass};

/// Exit code returned when no file matched.
pub const NOT_FOUND_EXIT_CODE: i32 = 2;

/// Matches for `suffix`: only the effective file, or all of them with `all`.
pub fn find(
    dirs: &BaseDirectories,
    class: FileClass,
    suffix: &Path,
    all: bool,
) -> xdg_dirs::Result<Vec<PathBuf>> {
    if all {
        dirs.find_files(class, suffix)
    } else {
        Ok(dirs.find_file(class, suffix)?.into_iter().collect())
    }
}

/// Run the find command, printing one path per line.
pub fn run_find(
    dirs: &BaseDirectories,
    class: FileClass,
    suffix: &Path,
    all: bool,
) -> anyhow::Result<i32> {
    let found = find(dirs, class, suffix, all)?;
    if found.is_empty() {
        tracing::info!(class = %class, suffix = %suffix.display(), "No matching file");
        eprintln!("{}: no {} file found", suffix.display(), class);
        return Ok(NOT_FOUND_EXIT_CODE);
    }
    for path in found {
        println!("{}", path.display());
    }
    Ok(0)
}

/// Run the place command.
pub fn run_place(dirs: &BaseDirectories, class: FileClass, suffix: &Path) -> anyhow::Result<i32> {
    let path = dirs.place_file(class, suffix)?;
    println!("{}", path.display());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use xdg_dirs::EnvSnapshot;

    #[test]
    fn test_find_first_or_all() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("home");
        let sys = temp.path().join("sys");
        for dir in [home.join(".config/app"), sys.join("app")] {
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("a.yaml"), "x: 1").unwrap();
        }
        let env = EnvSnapshot::new()
            .with("HOME", home.to_string_lossy())
            .with("XDG_CONFIG_DIRS", sys.to_string_lossy());
        let dirs = BaseDirectories::resolve(&env);

        let suffix = Path::new("app/a.yaml");
        let first = find(&dirs, FileClass::Config, suffix, false).unwrap();
        assert_eq!(first, vec![home.join(".config/app/a.yaml")]);

        let all = find(&dirs, FileClass::Config, suffix, true).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1], sys.join("app/a.yaml"));
    }
}
