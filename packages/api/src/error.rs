//! Error type for every backend call.

use store::{ApiErrorBody, ValidationError};

pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_UNAUTHORIZED: u16 = 401;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401. The gateway has already emitted an auth event.
    #[error("Authentication required")]
    Unauthorized { message: Option<String> },

    /// Any other non-2xx response.
    #[error("Request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Rejected on the client before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// Build an error from a non-2xx status and its raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        if status == STATUS_UNAUTHORIZED {
            ApiError::Unauthorized { message }
        } else {
            ApiError::Status { status, message }
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(STATUS_UNAUTHORIZED),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    pub fn is_bad_request(&self) -> bool {
        self.status() == Some(STATUS_BAD_REQUEST)
    }

    /// The human-readable message the server attached, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message } | ApiError::Status { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    /// Message for display: validation text, then the server's message, then
    /// `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation(e) => e.to_string(),
            other => other
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_reads_message() {
        let body = r#"{"timestamp":"2026-10-19T09:00","status":409,"code":"FAMILY_409_02","message":"Already in a family.","path":"/api/families/join"}"#;
        let err = ApiError::from_response(409, body);
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.server_message(), Some("Already in a family."));
        assert_eq!(err.user_message("Join failed"), "Already in a family.");
    }

    #[test]
    fn test_from_response_unauthorized() {
        let err = ApiError::from_response(401, "");
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn test_fallback_when_body_is_not_json() {
        let err = ApiError::from_response(500, "<html>oops</html>");
        assert_eq!(err.user_message("Something went wrong"), "Something went wrong");
        assert!(!err.is_bad_request());
        assert!(ApiError::from_response(400, "{}").is_bad_request());
    }

    #[test]
    fn test_validation_message_wins() {
        let err = ApiError::from(ValidationError::EmptyAnswer);
        assert_eq!(err.user_message("ignored"), ValidationError::EmptyAnswer.to_string());
        assert_eq!(err.status(), None);
    }
}
