//! Error types and result aliases for wsctl.
//!
//! Flow operations never fail outward (every remote failure is reported
//! through the notifier), so this type covers what is left around them:
//! - Loading configuration and building the HTTP client
//! - Fetching the workspace list
//! - Precondition failures surfaced by the command handlers

use thiserror::Error;

use crate::client::RemoteError;
use crate::workspace::WorkspaceError;

/// Main error type for wsctl operations.
///
/// Each variant carries a user-facing message. Use
/// [`is_retriable`](Self::is_retriable) to tell transient failures apart.
#[derive(Error, Debug)]
pub enum WsctlError {
    /// API returned a non-success status code.
    #[error("API request failed ({status}): {message}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// API returned 401 Unauthorized.
    #[error("Console API returned unauthorized (401). Check the access token in your configuration or WSCTL_ACCESS_TOKEN.")]
    Unauthorized,

    /// API server is unreachable (503 or connection failed).
    #[error("Console API is unavailable. Check your network connection or try again later.")]
    ApiUnavailable,

    /// Request timed out.
    #[error("Request timed out. The server may be slow or unreachable. Try again later.")]
    Timeout,

    /// Network error during HTTP request.
    #[error("Network error: {0}. Check your internet connection.")]
    Network(String),

    /// General configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}. Check file permissions and format.")]
    ConfigRead(String),

    /// IO operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON or TOML serialization/deserialization failed.
    #[error("Data serialization error: {0}. The server response may be malformed.")]
    Serialization(String),

    /// Workspace precondition or list error.
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
}

impl WsctlError {
    /// Checks if this error is transient and the operation might succeed on retry.
    ///
    /// Nothing in wsctl retries automatically; the command handlers use this
    /// to suggest running the command again.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout | Self::ApiUnavailable)
    }
}

/// Result type alias using [`WsctlError`].
pub type Result<T> = std::result::Result<T, WsctlError>;

impl From<serde_json::Error> for WsctlError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(format!("JSON error: {err}"))
    }
}

impl From<toml::de::Error> for WsctlError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigRead(format!("TOML parse error: {err}"))
    }
}

impl From<reqwest::Error> for WsctlError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ApiUnavailable
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<RemoteError> for WsctlError {
    fn from(err: RemoteError) -> Self {
        match err.status() {
            Some(401) => Self::Unauthorized,
            Some(503) => Self::ApiUnavailable,
            Some(status) => Self::ApiError {
                status,
                message: err.message().to_string(),
            },
            None if err.is_timeout() => Self::Timeout,
            None => Self::Network(err.message().to_string()),
        }
    }
}
