/**
 * Message Response
 *
 * This module defines the `{"message": ...}` body returned by endpoints whose
 * only result is a confirmation, such as register, login and logout.
 */
use serde::{Deserialize, Serialize};

/// Confirmation body
///
/// # Example
/// ```rust
/// use cms_server::shared::MessageResponse;
///
/// let body = MessageResponse::new("User registered successfully");
/// assert_eq!(
///     serde_json::to_string(&body).unwrap(),
///     r#"{"message":"User registered successfully"}"#
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
