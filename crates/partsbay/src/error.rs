//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable
//! help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use partsbay_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const VALIDATION: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────

    #[error("No backend configured")]
    #[diagnostic(
        code(partsbay::no_config),
        help(
            "Pass --server <url>, set PARTSBAY_SERVER, or create a profile:\n\
             partsbay config init --server https://api.partsbay.example\n\
             Config file: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(partsbay::config))]
    Config(#[from] partsbay_config::ConfigError),

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(partsbay::auth_failed),
        help(
            "The backend rejected the admin token.\n\
             Store a fresh one with: partsbay config set-token"
        )
    )]
    AuthFailed { message: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(partsbay::not_found),
        help("Run: partsbay {list_command} to see available entries")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Core passthrough ─────────────────────────────────────────────

    /// Local validation failure (duplicate name, empty input, …).
    #[error("{0}")]
    #[diagnostic(code(partsbay::validation))]
    Validation(String),

    /// Transport or server failure from the catalog API.
    #[error("{0}")]
    #[diagnostic(code(partsbay::api))]
    Api(String),

    // ── Interaction ──────────────────────────────────────────────────

    #[error("Cancelled")]
    #[diagnostic(code(partsbay::cancelled))]
    Cancelled,

    #[error("IO error: {0}")]
    #[diagnostic(code(partsbay::io))]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(message) => Self::Validation(message),
            CoreError::Api(api) if api.is_auth() => Self::AuthFailed {
                message: api.to_string(),
            },
            CoreError::Api(api) => Self::Api(api.to_string()),
        }
    }
}

impl CliError {
    /// Stable exit code for scripting.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Cancelled => exit_code::VALIDATION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::NoConfig { .. } | Self::Config(_) => exit_code::CONNECTION,
            Self::Api(_) => exit_code::CONNECTION,
            Self::Io(_) => exit_code::GENERAL,
        }
    }
}
