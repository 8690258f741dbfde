//! Middleware Module
//!
//! This module contains HTTP middleware for the backend server.
//!
//! - **`auth`** - Session cookie authentication for the private routes
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use axum::{middleware, routing::get, Router};
//! use cms_server::backend::auth::sessions::{SigningSecret, TokenService};
//! use cms_server::backend::middleware::auth_middleware;
//!
//! let tokens = Arc::new(TokenService::new(&SigningSecret::new("secret")));
//! let protected: Router = Router::new()
//!     .route("/content", get(|| async { "ok" }))
//!     .route_layer(middleware::from_fn_with_state(tokens, auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, authenticate, AuthUser, AuthenticatedUser};
