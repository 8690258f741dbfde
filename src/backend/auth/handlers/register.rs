/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate that username, email and password are present
 * 2. Hash the password with bcrypt at the configured cost
 * 3. Insert the user; the unique index on username rejects duplicates
 *
 * Registration does not sign the user in; the client calls /login next.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::RegisterRequest;
use crate::backend::auth::users::register_user;
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::server::state::AppState;
use crate::shared::MessageResponse;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, invalid email or malformed body
/// * `409 Conflict` - username already taken
/// * `500 Internal Server Error` - hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "password": "pw123"
/// }
/// ```
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    tracing::info!("Register request for username: {}", request.username);

    register_user(
        &state.db,
        &request.username,
        &request.email,
        &request.password,
        state.bcrypt_cost,
    )
    .await
    .map_err(|e| {
        tracing::warn!("Registration rejected for {}: {}", request.username, e);
        BackendError::from(e)
    })?;

    Ok(Json(MessageResponse::new("User registered successfully")))
}
