//! Amadeus client error types.

use std::fmt;

/// Errors from the Amadeus HTTP client.
#[derive(Debug)]
pub enum AmadeusError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Rate limited by the API
    RateLimited,

    /// Invalid credentials or expired token
    Unauthorized,

    /// OAuth token grant failed
    Token(String),
}

impl fmt::Display for AmadeusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmadeusError::Http(e) => write!(f, "HTTP error: {e}"),
            AmadeusError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            AmadeusError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            AmadeusError::RateLimited => write!(f, "rate limited by Amadeus API"),
            AmadeusError::Unauthorized => write!(f, "unauthorized (invalid credentials)"),
            AmadeusError::Token(msg) => write!(f, "token grant failed: {msg}"),
        }
    }
}

impl std::error::Error for AmadeusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AmadeusError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AmadeusError {
    fn from(err: reqwest::Error) -> Self {
        AmadeusError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AmadeusError::RateLimited;
        assert_eq!(err.to_string(), "rate limited by Amadeus API");

        let err = AmadeusError::ApiError {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = AmadeusError::Json {
            message: "expected string".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected string"));

        let err = AmadeusError::Token("bad grant".into());
        assert!(err.to_string().contains("bad grant"));
    }
}
