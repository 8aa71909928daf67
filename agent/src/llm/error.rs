//! Failure modes of a generation call

/// Error type for model client operations.
///
/// Each variant is a distinct failure the caller may want to report
/// differently; none of them is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LlmError {
    /// Credential missing, rejected or lacking permission
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The endpoint is throttling requests
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// Endpoint unreachable, timed out or returned a server error
    #[error("Inference service error: {0}")]
    Service(String),

    /// Successful status but a body we could not understand
    #[error("Invalid response from inference service: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    /// Classify a non-success HTTP status.
    ///
    /// `message` is the provider's error text (or the raw body).
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::Auth(message),
            429 => Self::RateLimited(message),
            _ => Self::Service(format!("HTTP {}: {}", status, message)),
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::InvalidResponse(e.to_string())
        } else {
            Self::Service(e.to_string())
        }
    }
}
