//! Environment views used as input to resolution.
//!
//! Resolution only ever reads variables through the [`Environment`] trait, so
//! a layout can be computed from the live process environment, from a frozen
//! [`EnvSnapshot`], or from a plain `HashMap` in tests.

use std::collections::{BTreeMap, HashMap};

/// Variables consulted during resolution.
pub const XDG_VARS: [&str; 7] = [
    "HOME",
    "XDG_CONFIG_HOME",
    "XDG_DATA_HOME",
    "XDG_CACHE_HOME",
    "XDG_RUNTIME_DIR",
    "XDG_CONFIG_DIRS",
    "XDG_DATA_DIRS",
];

/// Read-only view over environment variables.
pub trait Environment {
    /// Value of `key`, or `None` if unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key`, treating an empty value as unset.
    fn non_empty_var(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }
}

/// The live environment of the current process.
///
/// Non-UTF-8 values are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

/// A frozen copy of environment variables.
///
/// ```rust
/// use xdg_dirs::{BaseDirectories, EnvSnapshot};
///
/// let env = EnvSnapshot::new().with("HOME", "/home/u");
/// let dirs = BaseDirectories::resolve(&env);
/// assert_eq!(dirs.cache_home().unwrap().to_str(), Some("/home/u/.cache"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the resolution-relevant variables from the process environment.
    pub fn capture() -> Self {
        Self::capture_from(&ProcessEnvironment)
    }

    /// Capture the resolution-relevant variables from another environment view.
    pub fn capture_from(env: &impl Environment) -> Self {
        XDG_VARS
            .iter()
            .filter_map(|key| env.var(key).map(|value| (key.to_string(), value)))
            .collect()
    }

    /// Set a variable, returning the updated snapshot.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Remove a variable, returning the updated snapshot.
    pub fn without(mut self, key: &str) -> Self {
        self.vars.remove(key);
        self
    }

    /// Set a variable in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Iterate over the captured variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// True if no variables were captured.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Environment for EnvSnapshot {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_snapshot_builders() {
        let env = EnvSnapshot::new()
            .with("HOME", "/home/u")
            .with("XDG_CACHE_HOME", "/tmp/cache")
            .without("XDG_CACHE_HOME");

        assert_eq!(env.var("HOME").as_deref(), Some("/home/u"));
        assert_eq!(env.var("XDG_CACHE_HOME"), None);
        assert_eq!(env.iter().count(), 1);
    }

    #[test]
    fn test_empty_value_is_treated_as_unset() {
        let env: EnvSnapshot = [("XDG_DATA_HOME", "")].into_iter().collect();
        assert_eq!(env.var("XDG_DATA_HOME").as_deref(), Some(""));
        assert_eq!(env.non_empty_var("XDG_DATA_HOME"), None);
    }

    #[test]
    fn test_capture_from_only_copies_known_vars() {
        let mut source = HashMap::new();
        source.insert("HOME".to_string(), "/home/u".to_string());
        source.insert("PATH".to_string(), "/usr/bin".to_string());

        let snapshot = EnvSnapshot::capture_from(&source);
        assert_eq!(snapshot.var("HOME").as_deref(), Some("/home/u"));
        assert_eq!(snapshot.var("PATH"), None);
    }

    #[test]
    #[serial]
    fn test_process_environment_reads_live_values() {
        let key = "XDG_DIRS_TEST_PROCESS_ENV";
        std::env::set_var(key, "/somewhere");
        assert_eq!(ProcessEnvironment.var(key).as_deref(), Some("/somewhere"));
        std::env::remove_var(key);
        assert_eq!(ProcessEnvironment.var(key), None);
    }
}
