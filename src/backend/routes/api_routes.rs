/**
 * API Route Configuration
 *
 * This module registers the HTTP endpoints in two groups.
 *
 * # Public Routes
 * - `POST /register`, `POST /login`, `POST /logout`
 * - `GET /contents` - every content item
 * - `GET /stacks`, `POST /stacks`, `PUT /stacks/{id}`, `DELETE /stacks/{id}`
 *
 * # Private Routes (session cookie required)
 * - `GET /content`, `POST /content`
 * - `PUT /content/{id}`, `DELETE /content/{id}`
 */

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::{login, logout, register};
use crate::backend::content::handlers::{
    create_content, delete_content, list_all_contents, list_my_contents, update_content,
};
use crate::backend::server::state::AppState;
use crate::backend::stacks::handlers::{create_stack, delete_stack, list_stacks, update_stack};

/// Configure routes that need no session
pub fn configure_public_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        // Public listing
        .route("/contents", get(list_all_contents))
        // Stack registry
        .route("/stacks", get(list_stacks).post(create_stack))
        .route("/stacks/{id}", put(update_stack).delete(delete_stack))
}

/// Configure routes that act on the caller's own content
///
/// The caller wraps these in the authentication middleware.
pub fn configure_private_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/content", get(list_my_contents).post(create_content))
        .route("/content/{id}", put(update_content).delete(delete_content))
}
