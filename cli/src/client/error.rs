//! Failure shape shared by every console API call.

use std::fmt;

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::StreamExt;
use thiserror::Error;

use crate::decode::BodyReadError;

/// Un-consumed body of a failed response.
pub type BodyStream = BoxStream<'static, Result<Bytes, BodyReadError>>;

/// A console API call failed.
///
/// When the server answered, the error carries the status and the response
/// body as a stream that has not been read yet. Transport failures carry
/// neither.
#[derive(Error)]
#[error("{message}")]
pub struct RemoteError {
    status: Option<u16>,
    message: String,
    timeout: bool,
    body: Option<BodyStream>,
}

impl RemoteError {
    /// The server answered with a non-success status and this body.
    pub fn with_body(status: u16, body: BodyStream) -> Self {
        let reason = http::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("unexpected status");
        Self {
            status: Some(status),
            message: format!("request failed with status {status} ({reason})"),
            timeout: false,
            body: Some(body),
        }
    }

    /// The server answered, but there is no body to inspect.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
            timeout: false,
            body: None,
        }
    }

    /// The request never produced a response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            timeout: false,
            body: None,
        }
    }

    /// HTTP status, if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// Human readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the request timed out.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        self.timeout
    }

    /// Whether a response body is attached.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Takes the response body; it can be read only once.
    pub fn into_body(self) -> Option<BodyStream> {
        self.body
    }

    /// Builds an error whose body is `text`, delivered as one chunk.
    #[cfg(test)]
    pub fn with_text_body(status: u16, text: &str) -> Self {
        let chunk = Bytes::copy_from_slice(text.as_bytes());
        Self::with_body(status, futures::stream::iter([Ok(chunk)]).boxed())
    }
}

impl fmt::Debug for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteError")
            .field("status", &self.status)
            .field("message", &self.message)
            .field("timeout", &self.timeout)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
            timeout: err.is_timeout(),
            body: None,
        }
    }
}

impl From<reqwest_middleware::Error> for RemoteError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => Self::transport(e.to_string()),
        }
    }
}

/// Wraps a response body so it can travel inside a [`RemoteError`].
pub(crate) fn body_stream(response: reqwest::Response) -> BodyStream {
    response
        .bytes_stream()
        .map(|chunk| chunk.map_err(|e| BodyReadError::new(e.to_string())))
        .boxed()
}
