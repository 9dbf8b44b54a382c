//! Configuration loading and management.
//!
//! Provides the TOML-based configuration file for the scanner: the Notion
//! integration token, the API base URL, and pacing/probe tuning.
//!
//! # Configuration file
//!
//! The default configuration file is `notion-exposure-audit.toml` in the
//! current working directory. Use [`Config::load`] to read it:
//!
//! ```rust,no_run
//! use notion_exposure_audit::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! config.validate_token().expect("token not configured");
//! ```
//!
//! The token is carried inside the [`Config`] value and injected into the
//! client at construction; nothing in the crate reads credentials from the
//! process environment.

use crate::error::AuditError;
use std::path::Path;

/// Placeholder value shipped in documentation and template configs.
///
/// A token equal to this string is treated the same as a missing token: the
/// run refuses to start and the binary prints setup guidance instead.
pub const PLACEHOLDER_TOKEN: &str = "your_notion_integration_token_here";

/// Default path for the JSON report when `--output` is not given.
pub const DEFAULT_JSON_OUTPUT: &str = "notion_security_report.json";

/// Main configuration for the scanner.
///
/// Loaded from a TOML file (typically `notion-exposure-audit.toml`). All
/// fields except `token` carry sensible defaults, so a minimal config file
/// is just:
///
/// ```toml
/// token = "secret_..."
/// ```
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Notion integration token, sent as a bearer credential on every call.
    pub token: String,
    /// Base URL of the Notion API. Overridable for testing against a mock
    /// server.
    pub api_base: String,
    /// Fixed delay between API calls, in milliseconds.
    pub delay_ms: u64,
    /// Timeout for the unauthenticated reachability probe, in seconds.
    pub probe_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            token: String::new(),
            api_base: "https://api.notion.com".to_string(),
            delay_ms: 100,
            probe_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `notion-exposure-audit.toml` in the
    ///    current directory.
    /// 3. If that file does not exist either, return [`Config::default()`]
    ///    (which has an empty token and will fail [`Config::validate_token`]).
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Config`] when the explicit path does not exist,
    /// the file cannot be read, or the TOML content fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config, AuditError> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(AuditError::config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
        } else {
            let default_path = Path::new("notion-exposure-audit.toml");
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    AuditError::config(format!("failed to read {}: {}", path.display(), e))
                })?;
                let config: Config = toml::from_str(&content).map_err(|e| {
                    AuditError::config(format!("failed to parse {}: {}", path.display(), e))
                })?;
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }

    /// Checks that a usable token is present.
    ///
    /// An empty token or the documented [`PLACEHOLDER_TOKEN`] both fail, so a
    /// copied template config cannot silently run an unauthenticated scan.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Config`] when the token is missing or still the
    /// placeholder.
    pub fn validate_token(&self) -> Result<(), AuditError> {
        if self.token.is_empty() {
            return Err(AuditError::config("Notion integration token is not set"));
        }
        if self.token == PLACEHOLDER_TOKEN {
            return Err(AuditError::config(
                "Notion integration token is still the placeholder value",
            ));
        }
        Ok(())
    }
}
