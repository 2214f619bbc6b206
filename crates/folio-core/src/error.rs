// ── Core error types ──
//
// View-layer errors. Consumers never see reqwest or serde errors
// directly: the `From<folio_api::Error>` impl folds transport-layer
// failures into the taxonomy the page controllers branch on.

use thiserror::Error;

/// Flat error classification stored in a failed slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorKind {
    ConfigMissing,
    Network,
    HttpStatus(u16),
    Parse,
    Unauthorized,
    Validation,
    NotFound,
    Internal,
}

/// Unified error type for the core crate.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    // ── Configuration ────────────────────────────────────────────────
    #[error("API URL not configured")]
    ConfigMissing,

    // ── Transport ────────────────────────────────────────────────────
    #[error("Network error: {reason}")]
    Network { reason: String },

    #[error("Request failed with HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Invalid response: {message}")]
    Parse { message: String },

    #[error("Unauthorized (HTTP {status})")]
    Unauthorized { status: u16 },

    // ── Client-side ──────────────────────────────────────────────────
    #[error("{message}")]
    Validation { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigMissing => ErrorKind::ConfigMissing,
            Self::Network { .. } => ErrorKind::Network,
            Self::HttpStatus { status, .. } => ErrorKind::HttpStatus(*status),
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// The consuming page should redirect to its login flow.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<folio_api::Error> for CoreError {
    fn from(err: folio_api::Error) -> Self {
        match err {
            folio_api::Error::ConfigMissing => Self::ConfigMissing,
            folio_api::Error::Unauthorized { status } => Self::Unauthorized { status },
            folio_api::Error::Transport(e) => Self::Network {
                reason: e.to_string(),
            },
            folio_api::Error::InvalidUrl(e) => Self::Internal(format!("invalid URL: {e}")),
            folio_api::Error::HttpStatus { status, message } => Self::HttpStatus { status, message },
            folio_api::Error::Deserialization { message, .. } => Self::Parse { message },
        }
    }
}
