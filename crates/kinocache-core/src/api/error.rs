use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API key rejected - check the configured key")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limited - please wait before retrying")]
    RateLimited,

    #[error("Request timed out")]
    Timeout,

    #[error("Transport error: {message}")]
    TransportError {
        status: Option<u16>,
        message: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Server returned HTML instead of JSON - API key or routing is broken")]
    UpstreamMisconfigured,
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound(truncated),
            429 => ApiError::RateLimited,
            _ => ApiError::TransportError {
                status: Some(status.as_u16()),
                message: format!("Status {}: {}", status, truncated),
            },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::TransportError {
                status: err.status().map(|s| s.as_u16()),
                message: err.to_string(),
            }
        }
    }
}
