use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Authentication failed: {message}")]
    Authentication {
        message: String,
        hint: Option<String>,
    },

    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        retry_after: Option<Duration>,
    },

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ProviderError {
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Maps an HTTP error status to the taxonomy, pulling the provider's
    /// `error.message` out of the JSON body when present.
    #[must_use]
    pub fn from_status(status: u16, body: &str, api_key_env_var: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error")?.get("message")?.as_str().map(String::from))
            .unwrap_or_else(|| format!("HTTP {status}"));

        match status {
            401 | 403 => Self::Authentication {
                message,
                hint: Some(format!("Check your {api_key_env_var} environment variable")),
            },
            429 => Self::RateLimit {
                message,
                retry_after: None,
            },
            400..=499 => Self::InvalidRequest(message),
            500..=599 => Self::Server { status, message },
            _ => Self::InvalidRequest(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_401() {
        let body = r#"{"error": {"message": "Invalid API key"}}"#;
        let err = ProviderError::from_status(401, body, "OPENAI_API_KEY");

        match err {
            ProviderError::Authentication { message, hint } => {
                assert_eq!(message, "Invalid API key");
                assert!(hint.unwrap().contains("OPENAI_API_KEY"));
            }
            _ => panic!("Expected Authentication error"),
        }
    }

    #[test]
    fn test_from_status_429() {
        let body = r#"{"error": {"message": "Rate limit exceeded"}}"#;
        let err = ProviderError::from_status(429, body, "OPENAI_API_KEY");
        assert!(matches!(err, ProviderError::RateLimit { .. }));
    }

    #[test]
    fn test_from_status_500() {
        let body = r#"{"error": {"message": "Internal server error"}}"#;
        let err = ProviderError::from_status(500, body, "OPENAI_API_KEY");

        match err {
            ProviderError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal server error");
            }
            _ => panic!("Expected Server error"),
        }
    }

    #[test]
    fn test_from_status_unparseable_body() {
        let err = ProviderError::from_status(400, "not json at all", "OPENAI_API_KEY");

        match err {
            ProviderError::InvalidRequest(message) => assert_eq!(message, "HTTP 400"),
            _ => panic!("Expected InvalidRequest error"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = ProviderError::server(503, "overloaded");
        assert_eq!(err.to_string(), "Server error (503): overloaded");

        let err = ProviderError::Configuration("missing key".into());
        assert_eq!(err.to_string(), "Configuration error: missing key");
    }
}
