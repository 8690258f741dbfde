/**
 * Authentication Middleware
 *
 * This module protects routes that require a signed-in user. It reads the
 * session token from the `token` cookie, verifies it, and attaches the
 * caller's identity to the request extensions for handlers.
 *
 * # Outcomes
 *
 * - no `token` cookie → 401
 * - unreadable `Cookie` header → 400
 * - invalid or expired token → 401
 * - valid token → request continues with `AuthenticatedUser` attached
 *
 * Verification never touches the database.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::COOKIE, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tower_cookies::Cookie;
use uuid::Uuid;

use crate::backend::auth::sessions::{TokenService, TOKEN_COOKIE};
use crate::backend::error::BackendError;

/// Identity of the caller, taken from a verified session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Find the session token among the request's cookies
fn session_token(headers: &HeaderMap) -> Result<Option<String>, BackendError> {
    for value in headers.get_all(COOKIE) {
        let header = value.to_str().map_err(|_| {
            tracing::warn!("Cookie header is not valid UTF-8");
            BackendError::validation("Malformed cookie header")
        })?;

        for pair in header.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            // other cookies are not ours to validate
            let name = pair.split_once('=').map_or(pair, |(name, _)| name);
            if name.trim() != TOKEN_COOKIE {
                continue;
            }

            let cookie = Cookie::parse(pair.to_owned()).map_err(|e| {
                tracing::warn!("Unparseable session cookie: {}", e);
                BackendError::validation("Malformed cookie header")
            })?;
            return Ok(Some(cookie.value().to_owned()));
        }
    }

    Ok(None)
}

/// Decide whether a request carries a valid session
pub fn authenticate(
    headers: &HeaderMap,
    tokens: &TokenService,
) -> Result<AuthenticatedUser, BackendError> {
    let token = session_token(headers)?.ok_or_else(|| {
        tracing::warn!("Missing session cookie");
        BackendError::auth("Authentication required")
    })?;

    let claim = tokens.verify(&token).map_err(|e| {
        tracing::warn!("Rejected session token: {}", e);
        BackendError::from(e)
    })?;

    Ok(AuthenticatedUser {
        user_id: claim.user_id,
        username: claim.username,
    })
}

/// Authentication middleware
///
/// Applied to the private routes with `from_fn_with_state`.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authenticate(request.headers(), &tokens)?;
    tracing::debug!(user_id = %user.user_id, "Authenticated request");

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only usable behind `auth_middleware`; elsewhere it rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::auth("Authentication required")
            })?;

        Ok(AuthUser(user))
    }
}
