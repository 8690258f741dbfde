//! Content Module
//!
//! User-owned content items with embedded stack snapshots.
//!
//! # Module Structure
//!
//! ```text
//! content/
//! ├── mod.rs       - Module exports
//! ├── db.rs        - Content store (SQL)
//! ├── service.rs   - Write orchestration: validation, stack resolution, ownership
//! └── handlers.rs  - HTTP handlers for /content and /contents
//! ```
//!
//! Handlers call into `service`, never into `db` directly.

/// Content store database operations
pub mod db;

/// Content write orchestration
pub mod service;

/// HTTP handlers for content endpoints
pub mod handlers;

pub use service::{create_content, edit_content, list_all, list_owned, remove_content, ContentError};
