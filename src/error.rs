//! Error types for the recipe/shop API client.
//!
//! Every failure a caller can observe is one of the [`ApiError`] variants. The
//! request helper produces them; the accessors pass them through untouched.

use thiserror::Error;

/// Errors that can occur while configuring the client or talking to the API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The base address is missing or unusable. Raised before any request is made.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// A 2xx body could not be decoded into the expected record shape.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Connection refused, DNS failure, reset mid-body and the like.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Status code carried by an [`ApiError::Http`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_exposes_status_and_body() {
        let err = ApiError::Http {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "HTTP 503: maintenance");
    }

    #[test]
    fn non_http_errors_have_no_status() {
        let err = ApiError::Configuration("API_URL is not set".to_string());
        assert_eq!(err.status(), None);

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ApiError::from(parse).status(), None);
    }
}
