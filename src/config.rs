use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::theme::Theme;

/// Resolved once in `main` and passed down; screens never read the
/// environment themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub theme: Theme,
    pub log_level: String,
    pub return_delay: Duration,
    pub data_dir: PathBuf,
}

impl Settings {
    /// CLI values, overridden by `AIWAVE_*` variables when set.
    pub fn resolve(theme: Theme, log_level: String, return_delay_ms: u64) -> Result<Self> {
        Self::resolve_with(|key| std::env::var(key).ok(), theme, log_level, return_delay_ms)
    }

    fn resolve_with(
        lookup: impl Fn(&str) -> Option<String>,
        theme: Theme,
        log_level: String,
        return_delay_ms: u64,
    ) -> Result<Self> {
        let theme = match lookup("AIWAVE_THEME") {
            Some(v) => v.parse::<Theme>().context("Invalid AIWAVE_THEME")?,
            None => theme,
        };
        let log_level = lookup("AIWAVE_LOG_LEVEL").unwrap_or(log_level);
        let return_delay_ms = match lookup("AIWAVE_RETURN_DELAY_MS") {
            Some(v) => v
                .parse::<u64>()
                .with_context(|| format!("Invalid AIWAVE_RETURN_DELAY_MS: {}", v))?,
            None => return_delay_ms,
        };

        Ok(Self {
            theme,
            log_level,
            return_delay: Duration::from_millis(return_delay_ms),
            data_dir: default_data_dir(),
        })
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("aiwave.log")
    }
}

fn default_data_dir() -> PathBuf {
    // XDG data directory, or the working directory
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "aiwave") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_cli_values_used_without_env() {
        let s = Settings::resolve_with(lookup(&[]), Theme::Light, "info".into(), 3000).unwrap();
        assert_eq!(s.theme, Theme::Light);
        assert_eq!(s.log_level, "info");
        assert_eq!(s.return_delay, Duration::from_secs(3));
        assert!(s.log_path().ends_with("aiwave.log"));
    }

    #[test]
    fn test_env_overrides_cli() {
        let env = lookup(&[
            ("AIWAVE_THEME", "light"),
            ("AIWAVE_LOG_LEVEL", "trace"),
            ("AIWAVE_RETURN_DELAY_MS", "500"),
        ]);
        let s = Settings::resolve_with(env, Theme::Dark, "info".into(), 3000).unwrap();
        assert_eq!(s.theme, Theme::Light);
        assert_eq!(s.log_level, "trace");
        assert_eq!(s.return_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_bad_env_values_are_errors() {
        let env = lookup(&[("AIWAVE_RETURN_DELAY_MS", "soon")]);
        assert!(Settings::resolve_with(env, Theme::Dark, "info".into(), 3000).is_err());
        let env = lookup(&[("AIWAVE_THEME", "neon")]);
        assert!(Settings::resolve_with(env, Theme::Dark, "info".into(), 3000).is_err());
    }
}
