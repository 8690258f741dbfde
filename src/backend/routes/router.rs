/**
 * Router Configuration
 *
 * This module combines the public and private routes into a single Axum
 * router and applies the middleware stack.
 *
 * # Layers
 *
 * - Authentication middleware on the private routes only (`route_layer`,
 *   so unknown paths still reach the fallback)
 * - `CookieManagerLayer` so handlers can read and set cookies
 * - `TraceLayer` for request logging
 */

use axum::{middleware, Router};
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::{configure_private_routes, configure_public_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let public = configure_public_routes(Router::new());

    let private = configure_private_routes(Router::new()).route_layer(
        middleware::from_fn_with_state(app_state.tokens.clone(), auth_middleware),
    );

    public
        .merge(private)
        .fallback(|| async { BackendError::not_found("Not found") })
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
