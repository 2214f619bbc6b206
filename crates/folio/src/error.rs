//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use folio_config::ConfigError;
use folio_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────
    #[error("No API base URL configured")]
    #[diagnostic(
        code(folio::not_configured),
        help(
            "Set it with: folio config set api.base_url https://api.example.com\n\
             Or export FOLIO_API_BASE_URL.\n\
             Config file: {path}"
        )
    )]
    NotConfigured { path: String },

    #[error(transparent)]
    #[diagnostic(code(folio::config))]
    Config(Box<ConfigError>),

    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the backend: {reason}")]
    #[diagnostic(
        code(folio::connection_failed),
        help("Check that the backend is running and that api.base_url is correct.")
    )]
    ConnectionFailed { reason: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication required")]
    #[diagnostic(
        code(folio::auth_failed),
        help(
            "Store an admin token with: folio config set-token\n\
             Or export FOLIO_TOKEN."
        )
    )]
    AuthFailed,

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(code(folio::not_found))]
    NotFound {
        resource_type: String,
        identifier: String,
    },

    #[error("API error ({status}): {message}")]
    #[diagnostic(code(folio::api_error))]
    ApiError { status: String, message: String },

    // ── Input ────────────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(folio::validation))]
    Validation { field: String, reason: String },

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(folio::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Output serialization failed: {0}")]
    #[diagnostic(code(folio::serialize))]
    Serialize(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::NotConfigured { .. }
            | Self::Validation { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Map a page-level failure on `resource_type` `identifier`.
    pub fn for_resource(err: &CoreError, resource_type: &str, identifier: &str) -> Self {
        match err {
            CoreError::NotFound { .. } | CoreError::HttpStatus { status: 404, .. } => {
                Self::NotFound {
                    resource_type: resource_type.into(),
                    identifier: identifier.into(),
                }
            }
            other => other.clone().into(),
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConfigMissing => Self::NotConfigured {
                path: folio_config::config_path().display().to_string(),
            },
            CoreError::Network { reason } => Self::ConnectionFailed { reason },
            CoreError::Unauthorized { .. } => Self::AuthFailed,
            CoreError::HttpStatus { status, message } => Self::ApiError {
                status: status.to_string(),
                message,
            },
            CoreError::Parse { message } => Self::ApiError {
                status: "parse".into(),
                message,
            },
            CoreError::Validation { message } => Self::Validation {
                field: "input".into(),
                reason: message,
            },
            CoreError::NotFound { resource } => Self::NotFound {
                resource_type: resource,
                identifier: String::new(),
            },
            CoreError::Internal(message) => Self::ApiError {
                status: "internal".into(),
                message,
            },
        }
    }
}

pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}
