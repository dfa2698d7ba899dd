//! Client error types.
//!
//! # Design
//! The four API outcome kinds (`INVALID_ARGUMENT`, `UNAUTHENTICATED`,
//! `NOT_FOUND`, `INTERNAL`) form a flat taxonomy shared by the token endpoint
//! and the business operations. Each carries the server's human-readable
//! message when one was present in the response body; the rendered text is
//! `"<message>: <KIND>"`, or just `"<KIND>"` without a message. The remaining
//! variants cover failures that never reach the status mapping: transport
//! errors, JSON encode/decode, and construction-time configuration problems.

use std::fmt;

use reqwest::StatusCode;

/// Errors returned by the client.
#[derive(Debug)]
pub enum Error {
    /// The server rejected the request payload (HTTP 400/422), or a request
    /// could not be built from the given arguments.
    InvalidArgument(Option<String>),

    /// Credentials are missing, invalid, or expired (HTTP 401, from either a
    /// business-API call or the token endpoint).
    Unauthenticated(Option<String>),

    /// The target resource does not exist (HTTP 404).
    NotFound(Option<String>),

    /// Any other non-success status.
    Internal(Option<String>),

    /// The HTTP transport failed (connect, TLS, timeout).
    Request(reqwest::Error),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// Invalid client configuration.
    InvalidConfig(String),
}

fn fmt_kind(f: &mut fmt::Formatter<'_>, message: &Option<String>, kind: &str) -> fmt::Result {
    match message {
        Some(message) => write!(f, "{message}: {kind}"),
        None => write!(f, "{kind}"),
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(message) => fmt_kind(f, message, "INVALID_ARGUMENT"),
            Error::Unauthenticated(message) => fmt_kind(f, message, "UNAUTHENTICATED"),
            Error::NotFound(message) => fmt_kind(f, message, "NOT_FOUND"),
            Error::Internal(message) => fmt_kind(f, message, "INTERNAL"),
            Error::Request(e) => write!(f, "HTTP request failed: {e}"),
            Error::Serialization(message) => write!(f, "serialization failed: {message}"),
            Error::Deserialization(message) => {
                write!(f, "deserialization failed: {message}")
            }
            Error::InvalidConfig(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Request(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Request(err)
    }
}

/// Maps an HTTP status code to the taxonomy.
///
/// Success codes (200, 201, 202) map to `Ok(())`; everything else maps to the
/// taxonomy kind in the table, carrying the server message when one was
/// extracted from the response body. Applied to both the token endpoint and
/// the business operations.
pub(crate) fn check_status(status: StatusCode, message: Option<String>) -> Result<(), Error> {
    match status.as_u16() {
        200 | 201 | 202 => Ok(()),
        400 | 422 => Err(Error::InvalidArgument(message)),
        401 => Err(Error::Unauthenticated(message)),
        404 => Err(Error::NotFound(message)),
        _ => Err(Error::Internal(message)),
    }
}
