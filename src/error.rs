//! Error types.

use thiserror::Error;

/// The error type returned by the server's fallible operations.
///
/// Request-level failures are expressed as HTTP [`Response`](crate::Response)
/// values, not as `Error`s. This type surfaces infrastructure failures:
/// binding to a port or inspecting the listener.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// A URL string could not be decomposed into scheme, host, path and query.
///
/// Raised by [`package_path`](crate::package_path) and
/// [`rewrite_url`](crate::rewrite_url). The vanity handler maps it to a
/// `500 Internal Server Error`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid url: {0}")]
pub struct ParseError(#[from] url::ParseError);
