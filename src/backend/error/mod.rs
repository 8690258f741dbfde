//! Backend Error Module
//!
//! This module defines the error type returned by HTTP handlers.
//!
//! - **`types`** - `BackendError` and its status codes
//! - **`conversion`** - `IntoResponse` and conversions from component errors
//!
//! # Error Types
//!
//! | Variant | Status |
//! |---|---|
//! | `ValidationError` | 400 |
//! | `AuthError` | 401 |
//! | `ConflictError` | 409 |
//! | `NotFoundOrForbidden` | 404 |
//! | `DependencyError` | 500 |
//!
//! # Example
//!
//! ```rust,no_run
//! use cms_server::backend::error::BackendError;
//! use axum::Json;
//!
//! async fn handler() -> Result<Json<Vec<String>>, BackendError> {
//!     Err(BackendError::validation("Invalid stack ID"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
