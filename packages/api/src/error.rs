//! Error type shared by every call that goes through the gateway.

use std::time::Duration;

use store::StoreError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server answered 401. Credentials have already been cleared.
    #[error("unauthorized")]
    Unauthorized,
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Http { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message to show the user: the server's own message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ApiError::Http {
            status: 409,
            message: Some("Horario no disponible".into()),
        };
        assert_eq!(err.user_message("Could not save"), "Horario no disponible");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn fallback_without_server_message() {
        let err = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Could not save"), "Could not save");
        assert_eq!(
            ApiError::Network("refused".into()).user_message("Offline"),
            "Offline"
        );
    }
}
