//! Shared configuration for the PartsBay admin CLI.
//!
//! TOML profiles, token resolution (keyring + env + plaintext), and
//! translation to `partsbay_core::CatalogConfig`. The CLI adds
//! flag-aware overrides on top.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use partsbay_core::CatalogConfig;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no admin token configured for profile '{profile}'")]
    NoToken { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named backend profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Catalog backend base URL (e.g. "https://api.partsbay.example").
    pub server: String,

    /// Admin token (plaintext — prefer keyring or env var).
    pub token: Option<String>,

    /// Environment variable name containing the admin token.
    pub token_env: Option<String>,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "partsbay", "partsbay").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("partsbay");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("PARTSBAY_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Token resolution ────────────────────────────────────────────────

/// Resolve the admin token from the credential chain.
///
/// Order: profile's `token_env` env var → system keyring → plaintext in
/// the config file.
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's token_env → env var lookup
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring::Entry::new("partsbay", &format!("{profile_name}/token")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    if let Some(ref token) = profile.token {
        return Ok(SecretString::from(token.clone()));
    }

    Err(ConfigError::NoToken {
        profile: profile_name.into(),
    })
}

/// Store the admin token in the system keyring.
pub fn store_token(profile_name: &str, token: &str) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new("partsbay", &format!("{profile_name}/token")).map_err(|e| {
        ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        }
    })?;
    entry
        .set_password(token)
        .map_err(|e| ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        })
}

// ── Translation to core config ──────────────────────────────────────

/// Build a `CatalogConfig` from a profile — no CLI flag overrides.
///
/// A missing token is not an error here: reads work anonymously and
/// mutations surface the backend's 401 as-is.
pub fn profile_to_catalog_config(
    profile: &Profile,
    profile_name: &str,
) -> Result<CatalogConfig, ConfigError> {
    let base_url: url::Url = profile.server.parse().map_err(|_| ConfigError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {}", profile.server),
    })?;

    let token = resolve_token(profile, profile_name).ok();

    let mut config = CatalogConfig::new(base_url, token);
    config.transport.timeout = Duration::from_secs(profile.timeout.unwrap_or(30));
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = Config::default();
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert_eq!(cfg.defaults.output, "table");
        assert_eq!(cfg.defaults.timeout, 30);
        assert!(cfg.profiles.is_empty());
    }

    #[test]
    fn profile_parses_from_toml() {
        let cfg: Config = toml::from_str(
            r#"
            default_profile = "prod"

            [profiles.prod]
            server = "https://api.partsbay.example"
            token = "abc"
            timeout = 10
            "#,
        )
        .unwrap();

        let profile = &cfg.profiles["prod"];
        assert_eq!(profile.server, "https://api.partsbay.example");
        assert_eq!(profile.token.as_deref(), Some("abc"));
        assert_eq!(profile.timeout, Some(10));
    }

    #[test]
    fn plaintext_token_resolves_last() {
        let profile = Profile {
            server: "https://api.partsbay.example".into(),
            token: Some("plain".into()),
            token_env: None,
            timeout: None,
        };
        let secret = resolve_token(&profile, "test-profile-no-keyring").unwrap();
        use secrecy::ExposeSecret;
        assert_eq!(secret.expose_secret(), "plain");
    }

    #[test]
    fn missing_token_is_an_error_but_config_still_builds() {
        let profile = Profile {
            server: "https://api.partsbay.example".into(),
            ..Profile::default()
        };
        assert!(resolve_token(&profile, "nope").is_err());

        let config = profile_to_catalog_config(&profile, "nope").unwrap();
        assert!(config.token.is_none());
        assert_eq!(config.transport.timeout, Duration::from_secs(30));
    }

    #[test]
    fn invalid_server_url_is_rejected() {
        let profile = Profile {
            server: "not a url".into(),
            ..Profile::default()
        };
        assert!(profile_to_catalog_config(&profile, "x").is_err());
    }
}
