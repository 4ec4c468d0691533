//! # Auth Errors
//!
//! Failures from the login/register capability.

use thiserror::Error;

use crate::models::UNEXPECTED_ERROR;

/// Errors returned by an [`AuthService`](super::AuthService).
///
/// The screen only cares whether a human-readable message came back with the
/// failure; the variants exist so the adapter can log what actually happened.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Backend answered with a non-success status.
    #[error("rejected with status {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// `message` field of the response body, if any.
        message: Option<String>,
    },

    /// Request never got a response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Success status but the body could not be read.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    /// Rejection carrying a message, mostly for test doubles.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        AuthError::Rejected {
            status,
            message: Some(message.into()),
        }
    }

    /// The message the backend attached to the failure. Empty strings count as absent.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            AuthError::Rejected { message, .. } => {
                message.as_deref().filter(|m| !m.is_empty())
            }
            AuthError::Network(_) | AuthError::InvalidResponse(_) => None,
        }
    }

    /// Text for the inline error line.
    pub fn display_message(&self) -> String {
        self.user_message().unwrap_or(UNEXPECTED_ERROR).to_string()
    }
}

/// Result type for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;
