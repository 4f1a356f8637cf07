use thiserror::Error;

/// Top-level error type for the `partsbay-api` crate.
///
/// Covers every failure mode of the catalog API surface: authentication,
/// transport, structured API errors, and body decoding. `partsbay-core`
/// maps these into its own user-facing taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The backend rejected the admin token (HTTP 401).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── API ─────────────────────────────────────────────────────────
    /// Structured error from the catalog API. The `message` is the
    /// backend's `error` field, passed through verbatim as the
    /// user-facing text.
    #[error("Catalog API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the backend reported a missing resource.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if re-authenticating might resolve this error.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// The user-facing message for an API-level failure, if any.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}
