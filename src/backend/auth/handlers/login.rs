/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by username
 * 2. Verify the password with bcrypt
 * 3. Issue a session token valid for 24 hours
 * 4. Set it as the `token` cookie
 *
 * Unknown usernames and wrong passwords produce the same 401 response.
 */

use axum::{extract::State, response::Json};
use tower_cookies::{Cookie, Cookies};

use crate::backend::auth::handlers::types::LoginRequest;
use crate::backend::auth::sessions::TOKEN_COOKIE;
use crate::backend::auth::users::verify_credentials;
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::server::state::AppState;
use crate::shared::MessageResponse;

/// Login handler
///
/// On success the response carries
/// `Set-Cookie: token=<jwt>; HttpOnly; Path=/; Max-Age=86400`.
///
/// # Errors
///
/// * `400 Bad Request` - malformed body
/// * `401 Unauthorized` - unknown user or wrong password
/// * `500 Internal Server Error` - database or signing failure
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    let user = verify_credentials(&state.db, &request.username, &request.password)
        .await
        .map_err(|e| {
            tracing::warn!("Login failed for {}: {}", request.username, e);
            BackendError::from(e)
        })?;

    let issued = state.tokens.issue(user.id, &user.username)?;

    let cookie = Cookie::build((TOKEN_COOKIE, issued.token))
        .http_only(true)
        .path("/")
        .max_age(time::Duration::seconds(state.tokens.ttl().num_seconds()))
        .build();
    cookies.add(cookie);

    tracing::info!(user_id = %user.id, "User logged in: {}", user.username);
    Ok(Json(MessageResponse::new("User login successfully")))
}
