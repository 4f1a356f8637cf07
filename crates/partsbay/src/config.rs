//! Resolve the effective `CatalogConfig` from profiles, env, and flags.
//!
//! Precedence: CLI flags > environment > profile > defaults. A `--server`
//! flag alone is enough to run without any config file.

use std::time::Duration;

use secrecy::SecretString;

use partsbay_core::CatalogConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Build a `CatalogConfig` from the config file, profile, and CLI overrides.
pub fn build_catalog_config(global: &GlobalOpts) -> Result<CatalogConfig, CliError> {
    let cfg = partsbay_config::load_config_or_default();
    let profile_name = global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into());

    // If a profile exists, start from it and apply CLI flag overrides.
    if let Some(profile) = cfg.profiles.get(&profile_name) {
        let mut config = partsbay_config::profile_to_catalog_config(profile, &profile_name)?;

        if let Some(ref server) = global.server {
            config.base_url = server.parse().map_err(|_| {
                CliError::Validation(format!("invalid --server URL: {server}"))
            })?;
        }
        if let Some(ref token) = global.token {
            config.token = Some(SecretString::from(token.clone()));
        }
        config.transport.timeout = Duration::from_secs(global.timeout);
        return Ok(config);
    }

    // No profile found — build from CLI flags / env vars alone.
    let server = global.server.as_deref().ok_or_else(|| CliError::NoConfig {
        path: partsbay_config::config_path().display().to_string(),
    })?;

    let base_url: url::Url = server
        .parse()
        .map_err(|_| CliError::Validation(format!("invalid --server URL: {server}")))?;

    let token = global
        .token
        .as_ref()
        .map(|t| SecretString::from(t.clone()));

    let mut config = CatalogConfig::new(base_url, token);
    config.transport.timeout = Duration::from_secs(global.timeout);
    Ok(config)
}
