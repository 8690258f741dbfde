/**
 * Backend Error Types
 *
 * This module defines the error taxonomy returned by HTTP handlers.
 * Component errors (credential store, token service, stack registry,
 * content store) are converted into these variants in `conversion.rs`.
 *
 * # Error Categories
 *
 * - `ValidationError` - malformed or missing input (400)
 * - `AuthError` - missing, invalid or expired session, bad credentials (401)
 * - `ConflictError` - duplicate stack name or username (409)
 * - `NotFoundOrForbidden` - missing record or another user's record (404)
 * - `DependencyError` - persistence failure or timeout (500)
 *
 * `NotFoundOrForbidden` deliberately covers both cases so clients cannot
 * probe for other users' content.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend error taxonomy
///
/// # Usage
///
/// ```rust
/// use cms_server::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::validation("Invalid content ID");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Authentication error: {message}")]
    AuthError { message: String },

    #[error("Conflict: {message}")]
    ConflictError { message: String },

    #[error("Not found: {message}")]
    NotFoundOrForbidden { message: String },

    /// The detail is logged, never sent to the client
    #[error("Dependency error: {message}")]
    DependencyError { message: String },
}

impl BackendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::AuthError {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::ConflictError {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFoundOrForbidden {
            message: message.into(),
        }
    }

    pub fn dependency(message: impl Into<String>) -> Self {
        Self::DependencyError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::AuthError { .. } => StatusCode::UNAUTHORIZED,
            Self::ConflictError { .. } => StatusCode::CONFLICT,
            Self::NotFoundOrForbidden { .. } => StatusCode::NOT_FOUND,
            Self::DependencyError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { message }
            | Self::AuthError { message }
            | Self::ConflictError { message }
            | Self::NotFoundOrForbidden { message } => message.clone(),
            Self::DependencyError { .. } => "Internal server error".to_string(),
        }
    }
}
