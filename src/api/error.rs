//! Registration API error taxonomy

use reqwest::StatusCode;
use thiserror::Error;

pub const UNEXPECTED_RESPONSE: &str = "Unexpected server response";
pub const REGISTRATION_FAILED: &str = "Failed to register. Please try again.";
pub const CANNOT_CONNECT: &str = "Cannot connect to server. Check if backend is running.";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// Why a registration request did not succeed
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered, but not with 200 or 201
    #[error("server responded with {status}")]
    Server {
        status: StatusCode,
        message: Option<String>,
    },
    /// No response was received
    #[error("no response from server: {0}")]
    Network(String),
    /// The request never left the client
    #[error("unexpected error: {0}")]
    Unknown(String),
}

impl ApiError {
    /// Classify a transport error from reqwest
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::Unknown(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }

    /// Message shown to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { status, message } => {
                let fallback = if status.is_success() {
                    UNEXPECTED_RESPONSE
                } else {
                    REGISTRATION_FAILED
                };
                message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(fallback)
                    .to_string()
            }
            ApiError::Network(_) => CANNOT_CONNECT.to_string(),
            ApiError::Unknown(_) => UNEXPECTED_ERROR.to_string(),
        }
    }
}
