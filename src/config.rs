/// Runtime configuration
///
/// Where the question source and the result log live. Defaults sit in the
/// working directory; environment variables and command-line flags override
/// them, in that order.

use std::env;
use std::path::PathBuf;

/// Default question source, relative to the working directory
pub const DEFAULT_QUESTIONS_FILE: &str = "questions.json";

/// Default result log, relative to the working directory
pub const DEFAULT_RESULTS_FILE: &str = "results.json";

pub const QUESTIONS_ENV: &str = "SEARCH_EXPLAINER_QUESTIONS";
pub const RESULTS_ENV: &str = "SEARCH_EXPLAINER_RESULTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub questions_path: PathBuf,
    pub results_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_path: PathBuf::from(DEFAULT_QUESTIONS_FILE),
            results_path: PathBuf::from(DEFAULT_RESULTS_FILE),
        }
    }
}

impl Config {
    /// Build a config from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(QUESTIONS_ENV).filter(|v| !v.trim().is_empty()) {
            config.questions_path = expand_home(&path);
        }
        if let Some(path) = lookup(RESULTS_ENV).filter(|v| !v.trim().is_empty()) {
            config.results_path = expand_home(&path);
        }

        config
    }

    pub fn with_questions_path(mut self, raw: &str) -> Self {
        self.questions_path = expand_home(raw);
        self
    }

    pub fn with_results_path(mut self, raw: &str) -> Self {
        self.results_path = expand_home(raw);
        self
    }
}

/// Expand a leading `~` to the user's home directory
///
/// Paths without one, or systems without a home directory, are returned as-is.
pub fn expand_home(raw: &str) -> PathBuf {
    let raw = raw.trim();

    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.questions_path, PathBuf::from("questions.json"));
        assert_eq!(config.results_path, PathBuf::from("results.json"));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (QUESTIONS_ENV, "/tmp/q.json"),
            (RESULTS_ENV, "/tmp/r.json"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.questions_path, PathBuf::from("/tmp/q.json"));
        assert_eq!(config.results_path, PathBuf::from("/tmp/r.json"));
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = Config::from_lookup(|key| {
            (key == RESULTS_ENV).then(|| "   ".to_string())
        });
        assert_eq!(config.results_path, PathBuf::from(DEFAULT_RESULTS_FILE));
    }

    #[test]
    fn test_flags_win_over_env() {
        let config = Config::from_lookup(|key| {
            (key == RESULTS_ENV).then(|| "/from/env.json".to_string())
        })
        .with_results_path("/from/flag.json");

        assert_eq!(config.results_path, PathBuf::from("/from/flag.json"));
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("data/q.json"), PathBuf::from("data/q.json"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/q.json"), home.join("q.json"));
            assert_eq!(expand_home("~"), home);
        }
    }
}
