//! Backend Module
//!
//! Server-side code, compiled only with the `ssr` feature.
//!
//! # Request Flow
//!
//! HTTP request → `routes` → (`middleware::auth` for private routes) →
//! handler in `auth`, `stacks` or `content` → store functions → SQLite
//!
//! Component errors convert into `error::BackendError`, which renders the
//! JSON error body.

/// Server configuration, persistence handle, state and startup
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Request extractors shared by the handlers
pub mod extract;

/// Registration, login and session tokens
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Stack registry
pub mod stacks;

/// User-owned content
pub mod content;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;
