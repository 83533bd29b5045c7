//! Error types for the onboarding core.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Controller error: {0}")]
    Controller(#[from] ControllerError),
}

impl Error {
    /// The string shown to the user when this error surfaces in the view
    /// state. Session and API errors already carry user-facing text; the
    /// wrapper prefixes are for logs only.
    pub fn user_message(&self) -> String {
        match self {
            Self::Session(e) => e.to_string(),
            Self::Api(e) => e.user_message(),
            Self::Controller(e) => e.to_string(),
        }
    }
}

/// Precondition failures that must never reach the network.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Missing publisher session. Please sign in again.")]
    MissingPublisherId,
}

/// Transport, parse, and server-rejection failures from the ZamIO API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// User-facing text for the view state's error string.
    ///
    /// `Status` already carries a message extracted from the response body
    /// (field errors first, then `message`, then a generic fallback);
    /// transport and parse failures get the generic fallback because their
    /// detail is only useful in logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            Self::Transport { .. } | Self::Json(_) => {
                crate::api::GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}

/// Controller-level guard failures.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("A submission is already in progress")]
    SubmissionInFlight,
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
