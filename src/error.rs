/// Shown for any failure below the application layer
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Failed to fetch recommendations. Please try again.";

/// Shown for failures that fit no other category
pub const UNKNOWN_FALLBACK_MESSAGE: &str = "An unexpected error occurred";

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Input rejected before any request was built. Never shown to the user.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The recommendation service answered with an `{"error": ...}` payload
    #[error("Service error: {0}")]
    Service(String),

    /// Network failure, non-2xx without an error payload, or an unreadable body
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Unknown(err.to_string())
    }
}

impl AppError {
    /// Text displayed in the status line for this error
    pub fn user_message(&self) -> String {
        match self {
            AppError::Service(msg) => msg.clone(),
            AppError::Transport(_) => TRANSPORT_FALLBACK_MESSAGE.to_string(),
            AppError::Validation(_) | AppError::Unknown(_) => UNKNOWN_FALLBACK_MESSAGE.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_message_passes_through() {
        let err = AppError::Service("Title not found".to_string());
        assert_eq!(err.user_message(), "Title not found");
    }

    #[test]
    fn test_transport_uses_fallback() {
        let err = AppError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), TRANSPORT_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_unknown_uses_generic_fallback() {
        let err = AppError::Unknown("task panicked".to_string());
        assert_eq!(err.user_message(), "An unexpected error occurred");
    }

    #[tokio::test]
    async fn test_join_error_is_unknown() {
        let handle = tokio::spawn(async {
            if true {
                panic!("boom");
            }
        });
        let err = AppError::from(handle.await.unwrap_err());
        assert!(matches!(err, AppError::Unknown(_)));
    }
}
