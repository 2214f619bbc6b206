//! Config subcommand handlers.

use std::path::Path;

use folio_config::{self as config, Config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::error::{CliError, prompt_err};
use crate::output;

use super::{config_file, load};

const REDACTED: &str = "********";

// ── Helpers ─────────────────────────────────────────────────────────

/// The file's own contents, without environment overrides, so `set`
/// never writes env values back to disk.
fn read_file(path: &Path) -> Result<Config, CliError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = std::fs::read_to_string(path)?;
    toml::from_str(&text).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: format!("failed to parse {}: {e}", path.display()),
    })
}

fn invalid(key: &str, reason: &str) -> CliError {
    CliError::Validation {
        field: key.into(),
        reason: reason.into(),
    }
}

fn apply_setting(cfg: &mut Config, key: &str, value: &str) -> Result<(), CliError> {
    let value = value.trim();
    match key {
        "api.base_url" => {
            cfg.api.base_url = (!value.is_empty()).then(|| value.to_owned());
        }
        "api.build_id" => cfg.api.build_id = value.to_owned(),
        "api.timeout" => {
            cfg.api.timeout = Some(
                value
                    .parse()
                    .map_err(|_| invalid(key, "expected a number of seconds"))?,
            );
        }
        "auth.token_env" => {
            cfg.auth.token_env = (!value.is_empty()).then(|| value.to_owned());
        }
        "defaults.output" => cfg.defaults.output = value.to_owned(),
        "defaults.theme" => {
            cfg.defaults.theme = value
                .parse()
                .map_err(|_| invalid(key, "expected 'light' or 'dark'"))?;
        }
        "defaults.width" => {
            cfg.defaults.width = value
                .parse()
                .map_err(|_| invalid(key, "expected a width in pixels"))?;
        }
        _ => return Err(invalid("key", &format!("unknown config key '{key}'"))),
    }
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = config_file(global);
    match args.command {
        ConfigCommand::Show => {
            let mut cfg = load(global)?;
            if cfg.auth.token.is_some() {
                cfg.auth.token = Some(REDACTED.into());
            }
            let format = global.output.unwrap_or(OutputFormat::Table);
            let rendered = output::render_single(
                format,
                &cfg,
                |c| toml::to_string_pretty(c).unwrap_or_default(),
                |c| c.api.base_url.clone().unwrap_or_default(),
            )?;
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&path.display().to_string(), false);
            Ok(())
        }

        ConfigCommand::Set { key, value } => {
            let mut cfg = read_file(&path)?;
            apply_setting(&mut cfg, &key, &value)?;
            cfg.validate()?;
            config::save_to(&cfg, &path)?;
            if !global.quiet {
                eprintln!("✓ {key} updated in {}", path.display());
            }
            Ok(())
        }

        ConfigCommand::SetToken { token } => {
            let token = match token {
                Some(t) => t,
                None => rpassword::prompt_password("Admin token: ").map_err(prompt_err)?,
            };
            if token.trim().is_empty() {
                return Err(invalid("token", "token cannot be empty"));
            }
            config::store_token(token.trim())?;
            if !global.quiet {
                eprintln!("✓ Token stored in system keyring");
            }
            Ok(())
        }

        ConfigCommand::ClearToken => {
            config::clear_token()?;
            if !global.quiet {
                eprintln!("✓ Token removed from system keyring");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use folio_core::Theme;

    #[test]
    fn settings_are_applied_by_dotted_key() {
        let mut cfg = Config::default();
        apply_setting(&mut cfg, "api.base_url", " https://api.example.com ").unwrap();
        apply_setting(&mut cfg, "api.timeout", "15").unwrap();
        apply_setting(&mut cfg, "defaults.theme", "Light").unwrap();
        apply_setting(&mut cfg, "defaults.width", "375").unwrap();

        assert_eq!(cfg.api.base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(cfg.api.timeout, Some(15));
        assert_eq!(cfg.defaults.theme, Theme::Light);
        assert_eq!(cfg.defaults.width, 375);
    }

    #[test]
    fn blank_base_url_unsets_it() {
        let mut cfg = Config::default();
        cfg.api.base_url = Some("https://api.example.com".into());
        apply_setting(&mut cfg, "api.base_url", "  ").unwrap();
        assert_eq!(cfg.api.base_url, None);
    }

    #[test]
    fn bad_values_are_rejected() {
        let mut cfg = Config::default();
        assert!(apply_setting(&mut cfg, "api.timeout", "soon").is_err());
        assert!(apply_setting(&mut cfg, "defaults.theme", "sepia").is_err());
        assert!(apply_setting(&mut cfg, "nope", "x").is_err());
    }

    #[test]
    fn missing_file_reads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = read_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
