//! Build the environment snapshot the CLI resolves from.

use xdg_dirs::EnvSnapshot;

/// Start from the process environment (or nothing with `clear`) and apply
/// `KEY=VALUE` overrides in order.
pub fn build_environment(clear: bool, overrides: &[(String, String)]) -> EnvSnapshot {
    let mut env = if clear {
        EnvSnapshot::new()
    } else {
        EnvSnapshot::capture()
    };
    for (key, value) in overrides {
        tracing::debug!(key = %key, value = %value, "Environment override");
        env.set(key.as_str(), value.as_str());
    }
    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use xdg_dirs::Environment;

    #[test]
    fn test_clear_starts_empty() {
        let env = build_environment(true, &[]);
        assert!(env.is_empty());
    }

    #[test]
    fn test_later_overrides_win() {
        let overrides = vec![
            ("HOME".to_string(), "/a".to_string()),
            ("HOME".to_string(), "/b".to_string()),
            ("XDG_RUNTIME_DIR".to_string(), String::new()),
        ];
        let env = build_environment(true, &overrides);
        assert_eq!(env.var("HOME").as_deref(), Some("/b"));
        assert_eq!(env.var("XDG_RUNTIME_DIR").as_deref(), Some(""));
    }
}
