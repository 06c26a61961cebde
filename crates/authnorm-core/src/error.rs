//! Error types for URL decomposition.

use thiserror::Error;

/// Why a URL could not be split into a [`Location`](crate::location::Location).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The input was empty.
    #[error("empty URL")]
    Empty,
    /// The input did not look like `scheme://authority[path][?query][#fragment]`.
    #[error("malformed URL: {url}")]
    Malformed { url: String },
}
