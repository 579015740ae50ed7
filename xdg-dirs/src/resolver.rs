//! Resolution of the base directory layout from environment variables.
//!
//! [`BaseDirectories::resolve`] reads `HOME` and the `XDG_*` variables from an
//! [`Environment`], applies the documented defaults and validates every
//! candidate. Rejected values never abort resolution: the directory is left
//! unset (or the list element dropped) and a [`Diagnostic`] is recorded.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Serialize, Serializer};

use crate::class::FileClass;
use crate::env::{Environment, ProcessEnvironment};
use crate::path::is_absolute;

/// Placeholder substituted with the home directory in default templates.
const HOME_PLACEHOLDER: &str = "$HOME";

/// Separator between elements of `XDG_CONFIG_DIRS` and `XDG_DATA_DIRS`.
const LIST_SEPARATOR: char = ':';

/// A non-fatal problem found while resolving the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `HOME` is unset, empty or not absolute.
    HomeInvalid,
    /// No valid value could be derived for a base directory variable.
    NoValue { var: &'static str },
    /// A relative element of a search list was dropped.
    IgnoredElement { var: &'static str, element: String },
}

impl Diagnostic {
    /// The environment variable the diagnostic refers to.
    pub fn var(&self) -> &'static str {
        match self {
            Self::HomeInvalid => "HOME",
            Self::NoValue { var } | Self::IgnoredElement { var, .. } => var,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HomeInvalid => write!(f, "environment variable HOME is invalid or not set"),
            Self::NoValue { var } => write!(f, "no value set for {}", var),
            Self::IgnoredElement { var, element } => {
                write!(f, "ignoring {} path element: {}", var, element)
            }
        }
    }
}

impl Serialize for Diagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The resolved set of base directories.
///
/// Unset directories are `None`; every present path is absolute. The value is
/// immutable once resolved and can be shared between threads freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseDirectories {
    home: Option<PathBuf>,
    config_home: Option<PathBuf>,
    data_home: Option<PathBuf>,
    cache_home: Option<PathBuf>,
    runtime_dir: Option<PathBuf>,
    config_dirs: Vec<PathBuf>,
    data_dirs: Vec<PathBuf>,
    diagnostics: Vec<Diagnostic>,
}

static GLOBAL: OnceLock<BaseDirectories> = OnceLock::new();

impl BaseDirectories {
    /// Resolve the layout from an environment view.
    pub fn resolve(env: &impl Environment) -> Self {
        let mut resolver = Resolver::new(env);

        let config_home = resolver.scalar(FileClass::Config);
        let data_home = resolver.scalar(FileClass::Data);
        let cache_home = resolver.scalar(FileClass::Cache);
        let runtime_dir = resolver.scalar(FileClass::Runtime);
        let config_dirs = resolver.list(FileClass::Config);
        let data_dirs = resolver.list(FileClass::Data);

        let dirs = Self {
            home: resolver.home.map(PathBuf::from),
            config_home,
            data_home,
            cache_home,
            runtime_dir,
            config_dirs,
            data_dirs,
            diagnostics: resolver.diagnostics,
        };

        tracing::debug!(
            config_home = ?dirs.config_home,
            data_home = ?dirs.data_home,
            cache_home = ?dirs.cache_home,
            runtime_dir = ?dirs.runtime_dir,
            config_dirs = ?dirs.config_dirs,
            data_dirs = ?dirs.data_dirs,
            diagnostics = dirs.diagnostics.len(),
            "Resolved base directories"
        );

        dirs
    }

    /// Resolve the layout from the live process environment.
    pub fn from_env() -> Self {
        Self::resolve(&ProcessEnvironment)
    }

    /// The process-wide layout, resolved from the environment on first use.
    ///
    /// Later changes to the environment are not observed; call
    /// [`from_env`](Self::from_env) to resolve again.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::from_env)
    }

    /// The user's home directory, if `HOME` was valid.
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Base directory for user-specific configuration files.
    pub fn config_home(&self) -> Option<&Path> {
        self.config_home.as_deref()
    }

    /// Base directory for user-specific data files.
    pub fn data_home(&self) -> Option<&Path> {
        self.data_home.as_deref()
    }

    /// Base directory for user-specific cached data.
    pub fn cache_home(&self) -> Option<&Path> {
        self.cache_home.as_deref()
    }

    /// Base directory for user-specific runtime files.
    pub fn runtime_dir(&self) -> Option<&Path> {
        self.runtime_dir.as_deref()
    }

    /// Preference-ordered configuration search directories.
    pub fn config_dirs(&self) -> &[PathBuf] {
        &self.config_dirs
    }

    /// Preference-ordered data search directories.
    pub fn data_dirs(&self) -> &[PathBuf] {
        &self.data_dirs
    }

    /// Problems recorded during resolution, in the order they were found.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The user-specific base directory for a file class.
    pub fn home_for(&self, class: FileClass) -> Option<&Path> {
        match class {
            FileClass::Config => self.config_home(),
            FileClass::Data => self.data_home(),
            FileClass::Cache => self.cache_home(),
            FileClass::Runtime => self.runtime_dir(),
        }
    }

    /// The search directories for a file class; empty for cache and runtime.
    pub fn dirs_for(&self, class: FileClass) -> &[PathBuf] {
        match class {
            FileClass::Config => self.config_dirs(),
            FileClass::Data => self.data_dirs(),
            FileClass::Cache | FileClass::Runtime => &[],
        }
    }
}

/// Accumulates diagnostics while the individual values are resolved.
struct Resolver<'a, E: ?Sized> {
    env: &'a E,
    home: Option<String>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a, E: Environment + ?Sized> Resolver<'a, E> {
    fn new(env: &'a E) -> Self {
        let mut resolver = Self {
            env,
            home: None,
            diagnostics: Vec::new(),
        };

        match env.var("HOME") {
            Some(home) if is_absolute(&home) => resolver.home = Some(home),
            _ => resolver.record(Diagnostic::HomeInvalid),
        }

        resolver
    }

    fn record(&mut self, diagnostic: Diagnostic) {
        tracing::debug!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Resolve a single base directory, falling back to the class default.
    fn scalar(&mut self, class: FileClass) -> Option<PathBuf> {
        let var = class.env_var();
        let candidate = self
            .env
            .non_empty_var(var)
            .unwrap_or_else(|| self.expand_default(class.default_home()));

        if is_absolute(&candidate) {
            Some(PathBuf::from(candidate))
        } else {
            self.record(Diagnostic::NoValue { var });
            None
        }
    }

    /// Substitute `$HOME` in a default template.
    ///
    /// Yields an empty string when the template needs a home directory and
    /// none is set, so no partial path is ever produced.
    fn expand_default(&self, template: &str) -> String {
        if !template.contains(HOME_PLACEHOLDER) {
            return template.to_string();
        }
        match &self.home {
            Some(home) => template.replace(HOME_PLACEHOLDER, home),
            None => String::new(),
        }
    }

    /// Resolve a colon-separated search list, dropping relative elements.
    fn list(&mut self, class: FileClass) -> Vec<PathBuf> {
        let (Some(var), Some(default)) = (class.dirs_env_var(), class.default_dirs()) else {
            return Vec::new();
        };
        let value = self
            .env
            .non_empty_var(var)
            .unwrap_or_else(|| default.to_string());

        let mut dirs = Vec::new();
        for element in value.split(LIST_SEPARATOR) {
            if is_absolute(element) {
                dirs.push(PathBuf::from(element));
            } else {
                self.record(Diagnostic::IgnoredElement {
                    var,
                    element: element.to_string(),
                });
            }
        }
        dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::EnvSnapshot;

    fn home_only() -> EnvSnapshot {
        EnvSnapshot::new().with("HOME", "/home/u")
    }

    #[test]
    fn test_defaults_with_valid_home() {
        let dirs = BaseDirectories::resolve(&home_only());

        assert_eq!(dirs.home(), Some(Path::new("/home/u")));
        assert_eq!(dirs.config_home(), Some(Path::new("/home/u/.config")));
        assert_eq!(dirs.data_home(), Some(Path::new("/home/u/.local/share")));
        assert_eq!(dirs.cache_home(), Some(Path::new("/home/u/.cache")));
        assert_eq!(dirs.runtime_dir(), None);
        assert_eq!(dirs.config_dirs(), &[PathBuf::from("/etc/xdg")]);
        assert_eq!(
            dirs.data_dirs(),
            &[
                PathBuf::from("/usr/local/share"),
                PathBuf::from("/usr/share")
            ]
        );
        assert_eq!(
            dirs.diagnostics(),
            &[Diagnostic::NoValue {
                var: "XDG_RUNTIME_DIR"
            }]
        );
    }

    #[test]
    fn test_relative_home_is_rejected() {
        let env = EnvSnapshot::new().with("HOME", "relative/path");
        let dirs = BaseDirectories::resolve(&env);

        assert_eq!(dirs.home(), None);
        assert_eq!(dirs.config_home(), None);
        assert_eq!(dirs.data_home(), None);
        assert_eq!(dirs.cache_home(), None);
        assert_eq!(
            dirs.diagnostics(),
            &[
                Diagnostic::HomeInvalid,
                Diagnostic::NoValue {
                    var: "XDG_CONFIG_HOME"
                },
                Diagnostic::NoValue {
                    var: "XDG_DATA_HOME"
                },
                Diagnostic::NoValue {
                    var: "XDG_CACHE_HOME"
                },
                Diagnostic::NoValue {
                    var: "XDG_RUNTIME_DIR"
                },
            ]
        );
        // Lists have non-templated defaults and are unaffected.
        assert_eq!(dirs.config_dirs(), &[PathBuf::from("/etc/xdg")]);
    }

    #[test]
    fn test_unset_home_with_explicit_values() {
        let env = EnvSnapshot::new()
            .with("XDG_CONFIG_HOME", "/cfg")
            .with("XDG_RUNTIME_DIR", "/run/user/1000");
        let dirs = BaseDirectories::resolve(&env);

        assert_eq!(dirs.home(), None);
        assert_eq!(dirs.config_home(), Some(Path::new("/cfg")));
        assert_eq!(dirs.runtime_dir(), Some(Path::new("/run/user/1000")));
        assert_eq!(dirs.data_home(), None);
        assert_eq!(dirs.diagnostics()[0], Diagnostic::HomeInvalid);
    }

    #[test]
    fn test_empty_variable_uses_default() {
        let env = home_only().with("XDG_CACHE_HOME", "");
        let dirs = BaseDirectories::resolve(&env);
        assert_eq!(dirs.cache_home(), Some(Path::new("/home/u/.cache")));
    }

    #[test]
    fn test_relative_explicit_value_is_rejected() {
        let env = home_only().with("XDG_DATA_HOME", "share");
        let dirs = BaseDirectories::resolve(&env);

        assert_eq!(dirs.data_home(), None);
        assert!(dirs.diagnostics().contains(&Diagnostic::NoValue {
            var: "XDG_DATA_HOME"
        }));
    }

    #[test]
    fn test_mixed_list_keeps_absolute_elements_in_order() {
        let env = home_only().with("XDG_CONFIG_DIRS", "/b:rel:/a::./x:/c");
        let dirs = BaseDirectories::resolve(&env);

        assert_eq!(
            dirs.config_dirs(),
            &[
                PathBuf::from("/b"),
                PathBuf::from("/a"),
                PathBuf::from("/c")
            ]
        );
        let ignored: Vec<String> = dirs
            .diagnostics()
            .iter()
            .filter(|d| d.var() == "XDG_CONFIG_DIRS")
            .map(|d| d.to_string())
            .collect();
        assert_eq!(
            ignored,
            vec![
                "ignoring XDG_CONFIG_DIRS path element: rel",
                "ignoring XDG_CONFIG_DIRS path element: ",
                "ignoring XDG_CONFIG_DIRS path element: ./x",
            ]
        );
    }

    #[test]
    fn test_list_duplicates_are_kept() {
        let env = home_only().with("XDG_DATA_DIRS", "/usr/share:/usr/share");
        let dirs = BaseDirectories::resolve(&env);
        assert_eq!(dirs.data_dirs().len(), 2);
    }

    #[test]
    fn test_diagnostic_order_follows_resolution_order() {
        let env = EnvSnapshot::new()
            .with("XDG_CONFIG_DIRS", "c")
            .with("XDG_DATA_DIRS", "d");
        let dirs = BaseDirectories::resolve(&env);

        let vars: Vec<&str> = dirs.diagnostics().iter().map(Diagnostic::var).collect();
        assert_eq!(
            vars,
            vec![
                "HOME",
                "XDG_CONFIG_HOME",
                "XDG_DATA_HOME",
                "XDG_CACHE_HOME",
                "XDG_RUNTIME_DIR",
                "XDG_CONFIG_DIRS",
                "XDG_DATA_DIRS",
            ]
        );
        assert!(dirs.config_dirs().is_empty());
        assert!(dirs.data_dirs().is_empty());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let env = EnvSnapshot::new()
            .with("HOME", "/home/u")
            .with("XDG_DATA_DIRS", "/x:y:/z");
        assert_eq!(BaseDirectories::resolve(&env), BaseDirectories::resolve(&env));
    }

    #[test]
    fn test_home_for_and_dirs_for() {
        let env = home_only().with("XDG_RUNTIME_DIR", "/run/user/1");
        let dirs = BaseDirectories::resolve(&env);

        for class in FileClass::ALL {
            assert!(dirs.home_for(class).is_some(), "{} should be set", class);
        }
        assert_eq!(dirs.dirs_for(FileClass::Config), dirs.config_dirs());
        assert_eq!(dirs.dirs_for(FileClass::Data), dirs.data_dirs());
        assert!(dirs.dirs_for(FileClass::Cache).is_empty());
        assert!(dirs.dirs_for(FileClass::Runtime).is_empty());
    }

    #[test]
    fn test_global_is_resolved_once() {
        let first = BaseDirectories::global();
        let second = BaseDirectories::global();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_diagnostic_messages() {
        assert_eq!(
            Diagnostic::HomeInvalid.to_string(),
            "environment variable HOME is invalid or not set"
        );
        assert_eq!(
            Diagnostic::NoValue {
                var: "XDG_RUNTIME_DIR"
            }
            .to_string(),
            "no value set for XDG_RUNTIME_DIR"
        );
    }
}
