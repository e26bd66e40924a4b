use eyre::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const PROMPT1_VAR: &str = "GIT_PROMPT1";
pub const PROMPT2_VAR: &str = "GIT_PROMPT2";
pub const MARKER_VAR: &str = "GITSTRAP_MARKER";
pub const CONFIG_VAR: &str = "GITSTRAP_CONFIG";

/// Askpass responder settings
///
/// Git invokes the responder with a fixed argument list, so everything here is
/// resolved from a config file and the environment rather than CLI flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AskpassConfig {
    pub prompt1: Option<String>,
    pub prompt2: Option<String>,
    pub marker: PathBuf,
}

impl Default for AskpassConfig {
    fn default() -> Self {
        Self {
            prompt1: None,
            prompt2: None,
            marker: env::temp_dir().join("gitstrap-askpw"),
        }
    }
}

impl AskpassConfig {
    /// Get the global config directory path
    pub fn global_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gitstrap"))
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|d| d.join("gitstrap.yml"))
    }

    /// Load configuration with the cascade: GITSTRAP_CONFIG -> global -> defaults.
    /// Environment variables overlay whatever the file provided.
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(path) = env::var(CONFIG_VAR) {
            Self::load_from_file(&path).context(format!("Failed to load config from {path}"))?
        } else if let Some(global_config) = Self::global_config_path()
            && global_config.exists()
        {
            match Self::load_from_file(&global_config) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", global_config.display(), e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        log::debug!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Overlay values from the process environment
    pub fn apply_env(&mut self) {
        self.apply_vars(|name| env::var(name).ok());
    }

    fn apply_vars<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = var(PROMPT1_VAR) {
            self.prompt1 = Some(value);
        }
        if let Some(value) = var(PROMPT2_VAR) {
            self.prompt2 = Some(value);
        }
        if let Some(value) = var(MARKER_VAR) {
            self.marker = PathBuf::from(value);
        }
    }

    /// The prompt for the first credential request of a session
    pub fn prompt1(&self) -> Result<&str> {
        self.prompt1
            .as_deref()
            .ok_or_else(|| eyre::eyre!("{PROMPT1_VAR} is not set and the config file has no prompt1"))
    }

    /// The prompt for every subsequent credential request
    pub fn prompt2(&self) -> Result<&str> {
        self.prompt2
            .as_deref()
            .ok_or_else(|| eyre::eyre!("{PROMPT2_VAR} is not set and the config file has no prompt2"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = AskpassConfig::default();
        assert!(config.prompt1.is_none());
        assert!(config.prompt2.is_none());
        assert!(config.marker.ends_with("gitstrap-askpw"));
    }

    #[test]
    fn test_load_from_yaml() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("gitstrap.yml");

        let yaml = r#"
prompt1: "alice"
prompt2: "s3cret"
marker: /var/run/gitstrap/askpw
"#;
        fs::write(&config_path, yaml).unwrap();

        let config = AskpassConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config.prompt1.as_deref(), Some("alice"));
        assert_eq!(config.prompt2.as_deref(), Some("s3cret"));
        assert_eq!(config.marker, PathBuf::from("/var/run/gitstrap/askpw"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("gitstrap.yml");

        fs::write(&config_path, "prompt1: alice\n").unwrap();

        let config = AskpassConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config.prompt1.as_deref(), Some("alice"));
        assert!(config.prompt2.is_none());
        assert!(config.marker.ends_with("gitstrap-askpw"));
    }

    #[test]
    fn test_invalid_yaml_fails() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("gitstrap.yml");

        fs::write(&config_path, "prompt1: [not, a, string\n").unwrap();

        assert!(AskpassConfig::load_from_file(&config_path).is_err());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("gitstrap.yml");

        fs::write(&config_path, "prompt1: bob\nprompt2: hunter2\n").unwrap();

        let mut config = AskpassConfig::load_from_file(&config_path).unwrap();
        let env = vars(&[(PROMPT1_VAR, "alice"), (MARKER_VAR, "/tmp/elsewhere")]);
        config.apply_vars(|name| env.get(name).cloned());

        assert_eq!(config.prompt1.as_deref(), Some("alice"));
        assert_eq!(config.prompt2.as_deref(), Some("hunter2"));
        assert_eq!(config.marker, PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn test_env_fills_empty_config() {
        let mut config = AskpassConfig::default();
        let env = vars(&[(PROMPT1_VAR, "alice"), (PROMPT2_VAR, "s3cret")]);
        config.apply_vars(|name| env.get(name).cloned());

        assert_eq!(config.prompt1().unwrap(), "alice");
        assert_eq!(config.prompt2().unwrap(), "s3cret");
    }

    #[test]
    fn test_missing_prompt_is_an_error() {
        let config = AskpassConfig::default();

        let err = config.prompt1().unwrap_err();
        assert!(err.to_string().contains(PROMPT1_VAR));

        let err = config.prompt2().unwrap_err();
        assert!(err.to_string().contains(PROMPT2_VAR));
    }
}
