use thiserror::Error;

/// Core error taxonomy for the device-management layer.
///
/// Mirrors how failures are surfaced to the user:
///
/// - [`Validation`](CoreError::Validation) — raised locally before any
///   network call (empty name, duplicate sibling, missing context).
///   Shown inline only; the network is never touched.
/// - [`Api`](CoreError::Api) — transport or server failure during a load
///   or mutation. Shown inline and as a toast.
///
/// Staleness (a selection whose backing entity disappeared) is not an
/// error at all — [`SelectionState`](crate::SelectionState) clears it
/// silently.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Local validation failure. The message is already user-facing.
    #[error("{0}")]
    Validation(String),

    /// Transport or server failure from the catalog API.
    #[error(transparent)]
    Api(#[from] partsbay_api::Error),
}

impl CoreError {
    /// Construct a validation error from any displayable message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns `true` if this error never reached the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
