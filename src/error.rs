//! Error types for request handling.
//!
//! The routing core itself is total; errors only arise when a request is
//! parsed or validated before the pipeline runs.

use thiserror::Error;

/// Errors raised at the request boundary.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A request was well-formed JSON but its contents are not acceptable.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A request could not be parsed (missing fields, wrong types).
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RouteError>;

impl RouteError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Returns `true` for errors caused by the shape or contents of the input.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Json(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = RouteError::invalid_input("stop 3 has latitude 91");
        assert_eq!(err.to_string(), "invalid input: stop 3 has latitude 91");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_json_error_is_input_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RouteError::from(parse);
        assert!(err.is_input_error());
    }

    #[test]
    fn test_io_error_is_not_input_error() {
        let err = RouteError::from(std::io::Error::other("disk"));
        assert!(!err.is_input_error());
    }
}
