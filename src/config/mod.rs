pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{ApiConfig, AppConfig, LoggingConfig, UiConfig};

/// Overrides `api.base_url` when set.
pub const API_URL_ENV: &str = "CASBAH_API_URL";

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("candidat")
        .join("config.toml")
}

/// Load the config file, writing the defaults there on first run.
pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    let mut config = if path.exists() {
        read_config(&path)?
    } else {
        let config = AppConfig::default();
        if let Err(e) = save_config(&path, &config) {
            tracing::warn!(error = %e, "could not write default config");
        }
        config
    };
    apply_env_override(&mut config, std::env::var(API_URL_ENV).ok());
    Ok(config)
}

pub fn read_config(path: &Path) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    Ok(config)
}

pub fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

fn apply_env_override(config: &mut AppConfig, base_url: Option<String>) {
    if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_config_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.api.base_url = "http://127.0.0.1:8080".into();
        save_config(&path, &cfg).unwrap();
        assert_eq!(read_config(&path).unwrap(), cfg);
    }

    #[test]
    fn broken_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\nbase_url = 3").unwrap();
        assert!(read_config(&path).is_err());
    }

    #[test]
    fn env_override_replaces_base_url() {
        let mut cfg = AppConfig::default();
        apply_env_override(&mut cfg, Some(" http://localhost:5000 ".into()));
        assert_eq!(cfg.api.base_url, "http://localhost:5000");

        apply_env_override(&mut cfg, Some("   ".into()));
        assert_eq!(cfg.api.base_url, "http://localhost:5000");
    }
}
