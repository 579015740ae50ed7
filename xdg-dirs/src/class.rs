//! File classes of the XDG base directory layout.
//!
//! Each class has one user-specific base directory (the write location) and,
//! for configuration and data files, an ordered list of system directories
//! searched after it.

/// The class of file being looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileClass {
    /// Configuration files (`XDG_CONFIG_HOME`, `XDG_CONFIG_DIRS`).
    Config,
    /// Data files (`XDG_DATA_HOME`, `XDG_DATA_DIRS`).
    Data,
    /// Non-essential cached data (`XDG_CACHE_HOME`).
    Cache,
    /// Runtime files such as sockets and named pipes (`XDG_RUNTIME_DIR`).
    Runtime,
}

impl FileClass {
    /// All classes, in resolution order.
    pub const ALL: [FileClass; 4] = [Self::Config, Self::Data, Self::Cache, Self::Runtime];

    /// Environment variable holding the user-specific base directory.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::Config => "XDG_CONFIG_HOME",
            Self::Data => "XDG_DATA_HOME",
            Self::Cache => "XDG_CACHE_HOME",
            Self::Runtime => "XDG_RUNTIME_DIR",
        }
    }

    /// Default used when the base directory variable is unset or empty.
    ///
    /// `$HOME` is substituted with the resolved home directory. The runtime
    /// directory has no default.
    pub fn default_home(self) -> &'static str {
        match self {
            Self::Config => "$HOME/.config",
            Self::Data => "$HOME/.local/share",
            Self::Cache => "$HOME/.cache",
            Self::Runtime => "",
        }
    }

    /// Environment variable holding the search list, if the class has one.
    pub fn dirs_env_var(self) -> Option<&'static str> {
        match self {
            Self::Config => Some("XDG_CONFIG_DIRS"),
            Self::Data => Some("XDG_DATA_DIRS"),
            Self::Cache | Self::Runtime => None,
        }
    }

    /// Colon-separated default for the search list.
    pub fn default_dirs(self) -> Option<&'static str> {
        match self {
            Self::Config => Some("/etc/xdg"),
            Self::Data => Some("/usr/local/share:/usr/share"),
            Self::Cache | Self::Runtime => None,
        }
    }
}

impl std::fmt::Display for FileClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config => write!(f, "config"),
            Self::Data => write!(f, "data"),
            Self::Cache => write!(f, "cache"),
            Self::Runtime => write!(f, "runtime"),
        }
    }
}

impl std::str::FromStr for FileClass {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "config" => Ok(Self::Config),
            "data" => Ok(Self::Data),
            "cache" => Ok(Self::Cache),
            "runtime" => Ok(Self::Runtime),
            other => Err(format!(
                "unknown file class '{}' (expected config, data, cache or runtime)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(FileClass::Config.default_home(), "$HOME/.config");
        assert_eq!(FileClass::Data.default_home(), "$HOME/.local/share");
        assert_eq!(FileClass::Cache.default_home(), "$HOME/.cache");
        assert_eq!(FileClass::Runtime.default_home(), "");
        assert_eq!(FileClass::Config.default_dirs(), Some("/etc/xdg"));
        assert_eq!(
            FileClass::Data.default_dirs(),
            Some("/usr/local/share:/usr/share")
        );
    }

    #[test]
    fn test_only_config_and_data_have_lists() {
        assert!(FileClass::Config.dirs_env_var().is_some());
        assert!(FileClass::Data.dirs_env_var().is_some());
        assert!(FileClass::Cache.dirs_env_var().is_none());
        assert!(FileClass::Runtime.dirs_env_var().is_none());
    }

    #[test]
    fn test_display_and_parse() {
        for class in FileClass::ALL {
            assert_eq!(class.to_string().parse::<FileClass>(), Ok(class));
        }
        assert_eq!("CONFIG".parse::<FileClass>(), Ok(FileClass::Config));
        assert!("state".parse::<FileClass>().is_err());
    }
}
