//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the recruitment API lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. Unset means the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// UI behavior settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_alert_timeout")]
    pub alert_timeout_secs: u64,
    /// Extensions the résumé picker lists (lowercase, no dot).
    #[serde(default = "default_resume_extensions")]
    pub resume_extensions: Vec<String>,
    /// Hint shown under the résumé picker.
    #[serde(default = "default_resume_hint")]
    pub resume_hint: String,
    /// Directory the picker opens in. Defaults to the home directory.
    #[serde(default)]
    pub start_dir: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            alert_timeout_secs: default_alert_timeout(),
            resume_extensions: default_resume_extensions(),
            resume_hint: default_resume_hint(),
            start_dir: None,
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "https://casbah-backend.onrender.com".to_string()
}
fn default_true() -> bool {
    true
}
fn default_alert_timeout() -> u64 {
    5
}
fn default_resume_extensions() -> Vec<String> {
    vec!["pdf".into(), "doc".into(), "docx".into()]
}
fn default_resume_hint() -> String {
    "PDF, DOC, DOCX (Max 5MB)".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/candidat/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
