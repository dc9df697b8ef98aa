//! Typed outcomes for REST calls.

use thiserror::Error;

/// Failure modes of the backend API, as seen by the UI.
///
/// Role-check failures never appear here: the route guard turns those into
/// redirects, not errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The credential is missing, expired, or invalid.
    #[error("Your session has expired. Please log in again.")]
    Unauthenticated,
    /// The login attempt was rejected.
    #[error("Failed to login. Please check your credentials.")]
    InvalidCredentials,
    /// The server rejected the submitted data (bad fields, duplicates).
    #[error("{0}")]
    Validation(String),
    /// Transport failure or an unexpected server response.
    #[error("Could not reach the server: {0}")]
    Network(String),
}

impl ApiError {
    /// Stub error for endpoints invoked outside the browser.
    pub(crate) fn server_only() -> Self {
        Self::Network("not available on server".to_owned())
    }
}
