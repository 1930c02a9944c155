//! Catalog error types.

use std::fmt;

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors surfaced by the gateway and propagated unchanged by the engine.
///
/// Every variant carries owned strings so the error is `Clone`: a single
/// in-flight catalog fetch hands the same failure to all of its waiters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Network or connection failure (including transport timeouts).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Malformed or unexpected response body.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The backend reported no such product.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend answered with a non-success status other than 404.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The client could not be built from its configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Transport(_) => ErrorKind::Transport,
            CatalogError::Decode(_) => ErrorKind::Decode,
            CatalogError::NotFound(_) => ErrorKind::NotFound,
            CatalogError::Http { .. } => ErrorKind::Http,
            CatalogError::Config(_) => ErrorKind::Config,
        }
    }

    /// Check if this is a lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Decode(e.to_string())
    }
}

/// Coarse classification of a [`CatalogError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    Decode,
    NotFound,
    Http,
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Transport => "transport",
            ErrorKind::Decode => "decode",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Http => "http",
            ErrorKind::Config => "config",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        assert_eq!(CatalogError::Transport("refused".into()).kind(), ErrorKind::Transport);
        assert_eq!(CatalogError::NotFound("product 9".into()).kind(), ErrorKind::NotFound);
        assert_eq!(
            CatalogError::Http { status: 503, message: "down".into() }.kind(),
            ErrorKind::Http
        );
    }

    #[test]
    fn test_json_error_is_decode() {
        let err: CatalogError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_display() {
        let err = CatalogError::Http { status: 500, message: "boom".into() };
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert_eq!(ErrorKind::NotFound.to_string(), "not_found");
    }
}
