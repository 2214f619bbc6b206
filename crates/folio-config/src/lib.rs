//! Configuration for folio consumers.
//!
//! Layered loading (defaults, TOML file, `FOLIO_*` environment), admin
//! token resolution (env var, keyring, plaintext) and construction of the
//! `folio_api::ApiClient` / `folio_core::PageContext` the pages run on.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use folio_api::{ApiClient, TransportConfig};
use folio_core::{PageContext, Theme};

/// Keyring service name.
pub const KEYRING_SERVICE: &str = "folio";
const KEYRING_USER: &str = "api-token";

/// Flat alias accepted for the API base URL.
pub const BASE_URL_ALIAS: &str = "FOLIO_API_BASE_URL";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error(transparent)]
    Api(#[from] folio_api::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub auth: AuthSettings,

    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Backend origin, e.g. `https://api.example.com`. Unset disables all
    /// remote calls.
    pub base_url: Option<String>,

    /// Appended to asset URLs as `v=<build_id>`.
    #[serde(default = "default_build_id")]
    pub build_id: String,

    /// Request timeout in seconds; unset uses the transport default.
    pub timeout: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            build_id: default_build_id(),
            timeout: None,
        }
    }
}

fn default_build_id() -> String {
    "1".into()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthSettings {
    /// Environment variable holding the admin token.
    #[serde(default = "default_token_env")]
    pub token_env: Option<String>,

    /// Admin token in plaintext (prefer keyring or env var).
    pub token: Option<String>,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            token_env: default_token_env(),
            token: None,
        }
    }
}

#[allow(clippy::unnecessary_wraps)]
fn default_token_env() -> Option<String> {
    Some("FOLIO_TOKEN".into())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default)]
    pub theme: Theme,

    /// Viewport width used to size paged lists.
    #[serde(default = "default_width")]
    pub width: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            theme: Theme::default(),
            width: default_width(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}

fn default_width() -> u32 {
    1280
}

// ── Config file path ────────────────────────────────────────────────

/// Platform config file location.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "folio", "folio").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("folio");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Provider stack for `path`. Later layers win.
pub fn figment_for(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(
            Env::raw()
                .only(&[BASE_URL_ALIAS])
                .map(|_| "api.base_url".into()),
        )
        .merge(Env::prefixed("FOLIO_").split("__"))
}

/// Load from the platform config path plus environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_from(&config_path())
}

/// Load from `path` plus environment. A missing file is not an error.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let config: Config = figment_for(path).extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_to(cfg, &config_path())
}

pub fn save_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution ───────────────────────────────────────────

fn keyring_entry() -> Result<keyring::Entry, keyring::Error> {
    keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)
}

/// Admin token from the env var named in config, then the keyring, then
/// plaintext config. `None` means public-only access.
pub fn resolve_token(auth: &AuthSettings) -> Option<SecretString> {
    if let Some(val) = auth
        .token_env
        .as_deref()
        .and_then(|name| std::env::var(name).ok())
        .filter(|v| !v.trim().is_empty())
    {
        debug!("admin token from environment");
        return Some(SecretString::from(val));
    }

    if let Ok(secret) = keyring_entry().and_then(|entry| entry.get_password()) {
        debug!("admin token from keyring");
        return Some(SecretString::from(secret));
    }

    auth.token
        .clone()
        .filter(|t| !t.trim().is_empty())
        .map(SecretString::from)
}

/// Store the admin token in the OS keyring.
pub fn store_token(token: &str) -> Result<(), ConfigError> {
    keyring_entry()?.set_password(token)?;
    Ok(())
}

/// Remove the admin token from the OS keyring.
pub fn clear_token() -> Result<(), ConfigError> {
    match keyring_entry()?.delete_credential() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

// ── Runtime objects ─────────────────────────────────────────────────

impl Config {
    pub fn transport(&self) -> TransportConfig {
        match self.api.timeout {
            Some(secs) => TransportConfig::default().with_timeout(Duration::from_secs(secs)),
            None => TransportConfig::default(),
        }
    }

    /// HTTP client for the configured backend, carrying the admin token
    /// when one resolves.
    pub fn api_client(&self) -> Result<ApiClient, ConfigError> {
        let client = ApiClient::new(self.api.base_url.as_deref(), &self.transport())?;
        Ok(match resolve_token(&self.auth) {
            Some(token) => client.with_token(token),
            None => client,
        })
    }

    pub fn page_context(&self) -> Result<PageContext, ConfigError> {
        Ok(PageContext::new(self.api_client()?, self.api.build_id.clone()))
    }

    /// Reject values that would only fail later at request time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.build_id.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "api.build_id".into(),
                reason: "must not be empty".into(),
            });
        }
        if !matches!(self.defaults.output.as_str(), "table" | "json" | "yaml" | "plain") {
            return Err(ConfigError::Validation {
                field: "defaults.output".into(),
                reason: format!(
                    "expected 'table', 'json', 'yaml' or 'plain', got '{}'",
                    self.defaults.output
                ),
            });
        }
        Ok(())
    }
}
