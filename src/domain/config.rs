//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for bot identity, Twilio credentials and server settings.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub bot: BotConfig,
    pub services: ServicesConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub system: SystemConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

/// Identity settings for the bot persona.
#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    #[serde(default = "default_bot_name")]
    pub name: String,
    #[serde(default = "default_bot_style")]
    pub style: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            style: default_bot_style(),
        }
    }
}

fn default_bot_name() -> String {
    "Deep".to_string()
}

fn default_bot_style() -> String {
    "colombian".to_string()
}

/// Configuration for connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub twilio: TwilioConfig,
}

/// Twilio credentials. Each secret can be given inline or through an
/// environment variable indirection (`*_env`), which wins when both are set.
#[derive(Debug, Deserialize, Clone)]
pub struct TwilioConfig {
    #[serde(default)]
    pub account_sid: Option<String>,
    #[serde(default)]
    pub account_sid_env: Option<String>, // e.g. "TWILIO_ACCOUNT_SID"
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub auth_token_env: Option<String>, // e.g. "TWILIO_AUTH_TOKEN"
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,
    #[serde(default)]
    pub validate_signatures: bool,
}

impl TwilioConfig {
    pub fn resolve_account_sid(&self) -> Result<String> {
        resolve_secret("account_sid", &self.account_sid, &self.account_sid_env)
    }

    pub fn resolve_auth_token(&self) -> Result<String> {
        resolve_secret("auth_token", &self.auth_token, &self.auth_token_env)
    }
}

fn resolve_secret(
    field: &str,
    inline: &Option<String>,
    env_name: &Option<String>,
) -> Result<String> {
    if let Some(var) = env_name {
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                return Ok(value);
            }
        }
    }
    inline
        .clone()
        .filter(|v| !v.is_empty())
        .with_context(|| format!("services.twilio.{field} is not configured"))
}

fn default_whatsapp_number() -> String {
    "whatsapp:+14155238886".to_string()
}

/// HTTP server bind settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// System-level settings.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct SystemConfig {
    #[serde(default)]
    pub log_filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = "\
services:
  twilio:
    account_sid: AC123
    auth_token: secret
";

    #[test]
    fn test_load_minimal_config_applies_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.bot.name, "Deep");
        assert_eq!(config.bot.style, "colombian");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.services.twilio.whatsapp_number, "whatsapp:+14155238886");
        assert!(!config.services.twilio.validate_signatures);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = AppConfig::load(Path::new("/nonexistent/config.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_inline_secret_resolution() {
        let twilio = TwilioConfig {
            account_sid: Some("AC9".into()),
            account_sid_env: None,
            auth_token: None,
            auth_token_env: None,
            whatsapp_number: default_whatsapp_number(),
            validate_signatures: false,
        };
        assert_eq!(twilio.resolve_account_sid().unwrap(), "AC9");
        assert!(twilio.resolve_auth_token().is_err());
    }

    #[test]
    fn test_env_indirection_wins_over_inline() {
        unsafe { std::env::set_var("PARCERO_TEST_SID", "AC_env") };
        let twilio = TwilioConfig {
            account_sid: Some("AC_inline".into()),
            account_sid_env: Some("PARCERO_TEST_SID".into()),
            auth_token: None,
            auth_token_env: None,
            whatsapp_number: default_whatsapp_number(),
            validate_signatures: false,
        };
        assert_eq!(twilio.resolve_account_sid().unwrap(), "AC_env");
        unsafe { std::env::remove_var("PARCERO_TEST_SID") };
    }
}
