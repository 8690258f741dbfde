/**
 * Authentication Handler Types
 *
 * Request bodies for the register and login handlers. Responses are the
 * shared `MessageResponse`; the session itself travels in a cookie.
 */

use serde::{Deserialize, Serialize};

/// Register request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Unique username
    pub username: String,
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    /// Verified against the stored hash, never logged
    pub password: String,
}
