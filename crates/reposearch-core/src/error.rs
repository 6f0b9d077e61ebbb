//! Error types for reposearch.
//!
//! A single error type with explicit variants for transport, protocol,
//! decoding and input validation failures. Everything except
//! [`Error::InvalidInput`] is a network failure from the pager's point of view.

use std::fmt;
use thiserror::Error;

/// The unified error type for reposearch operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, IO).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The search API answered with a non-success status.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The response body could not be decoded.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// Input validation errors (invalid URL, query, page key, load size).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true when the failure came from talking to the remote side.
    pub fn is_network_failure(&self) -> bool {
        !matches!(self, Error::InvalidInput(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode {
            message: err.to_string(),
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// Local IO error (file-backed search).
    #[error("IO error: {message}")]
    Io { message: String },
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        TransportError::Io {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// A non-success response from the search API.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server, if the body carried one.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// GitHub rejects over-quota requests with 403 or 429.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
            || (self.status == 403
                && self
                    .message
                    .as_deref()
                    .is_some_and(|m| m.to_ascii_lowercase().contains("rate limit")))
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid search query.
    #[error("invalid query '{value}': {reason}")]
    Query { value: String, reason: String },

    /// Invalid page key.
    #[error("invalid page key {value}: {reason}")]
    PageKey { value: u32, reason: String },

    /// Load size the paging source cannot translate into page keys.
    #[error("unsupported load size {load_size}: {reason}")]
    LoadSize { load_size: u32, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
