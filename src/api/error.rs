use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Not signed in")]
    MissingToken,
    #[error("Authentication failed: {}", .message.as_deref().unwrap_or("session expired"))]
    Unauthorized { message: Option<String> },
    #[error("Server returned {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Server {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("Serialization error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Broad category of a failed request, used for user-facing handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Authentication,
    Business,
    Unknown,
}

/// Normalized failure handed to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub kind: FailureKind,
    /// Human-readable text reported by the server, when it sent one
    pub message: Option<String>,
}

impl ApiFailure {
    pub fn new(kind: FailureKind, message: Option<String>) -> Self {
        Self { kind, message }
    }

    /// Server text if present, otherwise the given fallback
    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}

impl From<ApiError> for ApiFailure {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(_) => ApiFailure::new(FailureKind::Network, None),
            ApiError::MissingToken => ApiFailure::new(FailureKind::Authentication, None),
            ApiError::Unauthorized { message } => {
                ApiFailure::new(FailureKind::Authentication, message)
            }
            ApiError::Server { message, .. } => ApiFailure::new(FailureKind::Business, message),
            ApiError::Decode(_) => ApiFailure::new(FailureKind::Unknown, None),
        }
    }
}
