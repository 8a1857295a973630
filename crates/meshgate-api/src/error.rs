use thiserror::Error;

/// Top-level error type for the `meshgate-api` crate.
///
/// Covers every failure mode of a remote call: authentication, transport,
/// the GraphQL envelope, and per-mutation rejections. `meshgate-core` maps
/// these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The API token was rejected (HTTP 401) or could not be sent.
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── GraphQL envelope ────────────────────────────────────────────
    /// The response carried top-level GraphQL errors.
    #[error("GraphQL error: {message}")]
    Graphql { message: String },

    /// A mutation came back with `ok: false`; `message` is the service's
    /// error string, passed through verbatim.
    #[error("failed to {operation}: {message}")]
    Rejected { operation: String, message: String },

    /// A mutation reported success but returned no entity payload.
    #[error("{operation} returned no entity")]
    MissingEntity { operation: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("deserialization error: {message}")]
    Deserialization { message: String, body: String },
}
