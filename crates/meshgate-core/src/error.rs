// ── Core error types ──
//
// User-facing errors from meshgate-core. Consumers never see HTTP status
// codes or the GraphQL envelope directly. The `From<meshgate_api::Error>`
// impl translates transport-layer errors into this taxonomy.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Local, pre-call configuration problems. Recoverable by correcting
    /// input; nothing was sent to the service. All problems found are
    /// collected, never just the first.
    #[error("validation failed: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },

    /// The remote call failed. The service's message passes through
    /// verbatim; nothing was applied remotely.
    #[error("{message}")]
    Remote { message: String },

    /// A remote response could not be mapped into the local shape.
    /// Fatal for that call.
    #[error("mapping error: {message}")]
    Mapping { message: String },

    /// Connection configuration problems (bad URL, missing credentials).
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            errors: vec![message.into()],
        }
    }

    pub(crate) fn mapping(message: impl Into<String>) -> Self {
        Self::Mapping {
            message: message.into(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<meshgate_api::Error> for CoreError {
    fn from(err: meshgate_api::Error) -> Self {
        match err {
            meshgate_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("invalid URL: {e}"),
            },
            meshgate_api::Error::Deserialization { message, body: _ } => {
                CoreError::Mapping { message }
            }
            err @ meshgate_api::Error::MissingEntity { .. } => CoreError::Mapping {
                message: err.to_string(),
            },
            // Authentication, transport, GraphQL, and rejection failures
            // all surface as remote errors with the message intact.
            other => CoreError::Remote {
                message: other.to_string(),
            },
        }
    }
}
