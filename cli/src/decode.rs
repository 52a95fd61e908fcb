//! Response body decoding.
//!
//! Failed console requests hand back their body as a byte stream. This module
//! turns such a stream into a [`DecodedBody`]:
//! - [`decode`] - Reads the stream to its end, then decodes
//! - [`decode_first_chunk`] - Reads exactly one chunk, then decodes
//! - [`decode_bytes`] - Decodes an in-memory buffer
//!
//! A body that is not JSON is not an error: the raw text is kept and the parse
//! error travels next to it. Only a stream that breaks while being read yields
//! `Err`.

use std::fmt;

use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};
use serde_json::Value;
use thiserror::Error;

/// Payload of a decoded body.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyData {
    /// The body parsed as JSON.
    Json(Value),
    /// The body as UTF-8 text, kept because it did not parse.
    Text(String),
}

/// Marker recording why a body did not parse as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("body is not valid JSON: {message}")]
pub struct DecodeError {
    message: String,
    line: usize,
    column: usize,
}

impl DecodeError {
    /// Line of the parse failure.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Column of the parse failure.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// The stream itself failed before the body was complete.
#[derive(Debug, Clone, Error)]
#[error("failed to read response body: {0}")]
pub struct BodyReadError(String);

impl BodyReadError {
    /// Wraps a transport failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Result of decoding one response body.
///
/// `error` is `Some` exactly when the bytes were not valid JSON; `data` then
/// holds [`BodyData::Text`] with the raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedBody {
    /// Parsed JSON or the raw text.
    pub data: BodyData,
    /// Parse failure, if any.
    pub error: Option<DecodeError>,
}

impl DecodedBody {
    /// Returns the parsed JSON value, if the body was JSON.
    #[must_use]
    pub fn json(&self) -> Option<&Value> {
        match &self.data {
            BodyData::Json(value) => Some(value),
            BodyData::Text(_) => None,
        }
    }

    /// Returns the raw text, if the body was not JSON.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.data {
            BodyData::Text(text) => Some(text),
            BodyData::Json(_) => None,
        }
    }

    /// Returns the `code` string of a JSON object body.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.json()?.get("code")?.as_str()
    }

    /// Returns the human readable part of the body.
    ///
    /// For JSON this is the `error` or `message` field; otherwise the raw text.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        match &self.data {
            BodyData::Json(value) => value
                .get("error")
                .or_else(|| value.get("message"))
                .and_then(Value::as_str),
            BodyData::Text(text) if text.trim().is_empty() => None,
            BodyData::Text(text) => Some(text.trim()),
        }
    }
}

/// Decodes an in-memory body.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD before parsing.
#[must_use]
pub fn decode_bytes(bytes: &[u8]) -> DecodedBody {
    let text = String::from_utf8_lossy(bytes);
    match serde_json::from_str::<Value>(&text) {
        Ok(value) => DecodedBody {
            data: BodyData::Json(value),
            error: None,
        },
        Err(err) => DecodedBody {
            data: BodyData::Text(text.into_owned()),
            error: Some(err.into()),
        },
    }
}

/// Reads `stream` until it ends and decodes the accumulated bytes.
///
/// This is the variant the workspace flow uses: a body split over several
/// chunks is decoded as a whole.
///
/// # Errors
///
/// Returns [`BodyReadError`] if the stream yields an error before it ends.
pub async fn decode<S, E>(mut stream: S) -> Result<DecodedBody, BodyReadError>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: fmt::Display,
{
    let mut body = BytesMut::new();
    while let Some(item) = stream.next().await {
        let chunk = item.map_err(|e| BodyReadError::new(e.to_string()))?;
        body.extend_from_slice(&chunk);
    }

    tracing::trace!(bytes = body.len(), "decoded response body");
    Ok(decode_bytes(&body))
}

/// Reads exactly one chunk from `stream` and decodes it.
///
/// Anything after the first chunk is never read, so a body the producer split
/// over several chunks comes back truncated (and usually unparseable). An
/// empty stream decodes as an empty body.
///
/// # Errors
///
/// Returns [`BodyReadError`] if the first chunk is an error.
pub async fn decode_first_chunk<S, E>(mut stream: S) -> Result<DecodedBody, BodyReadError>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: fmt::Display,
{
    match stream.next().await {
        Some(item) => {
            let chunk = item.map_err(|e| BodyReadError::new(e.to_string()))?;
            Ok(decode_bytes(&chunk))
        }
        None => Ok(decode_bytes(&[])),
    }
}
