//! Config subcommands — these run without a backend connection.

use partsbay_config::{Config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init { server } => {
            let mut cfg = partsbay_config::load_config_or_default();
            let server = server
                .or_else(|| global.server.clone())
                .unwrap_or_else(|| "https://api.partsbay.example".into());

            cfg.profiles.insert(
                "default".into(),
                Profile {
                    server,
                    ..Profile::default()
                },
            );
            if cfg.default_profile.is_none() {
                cfg.default_profile = Some("default".into());
            }
            partsbay_config::save_config(&cfg)?;

            if !global.quiet {
                println!("Wrote {}", partsbay_config::config_path().display());
                println!("Store your admin token with: partsbay config set-token");
            }
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = partsbay_config::load_config_or_default();
            if !global.quiet {
                println!("{}", render_redacted(&cfg)?);
            }
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", partsbay_config::config_path().display());
            Ok(())
        }

        ConfigCommand::SetToken { profile } => {
            let token = rpassword::prompt_password("Admin token: ")?;
            if token.trim().is_empty() {
                return Err(CliError::Validation("Token must not be empty".into()));
            }
            partsbay_config::store_token(&profile, token.trim())?;
            if !global.quiet {
                println!("Token stored in the system keyring for profile '{profile}'");
            }
            Ok(())
        }
    }
}

/// Serialize the config with plaintext tokens masked.
fn render_redacted(cfg: &Config) -> Result<String, CliError> {
    let mut redacted = cfg.clone();
    for profile in redacted.profiles.values_mut() {
        if profile.token.is_some() {
            profile.token = Some("***".into());
        }
    }
    toml::to_string_pretty(&redacted)
        .map_err(|e| CliError::Config(partsbay_config::ConfigError::Serialization(e)))
}
