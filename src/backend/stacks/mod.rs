//! Stack Registry Module
//!
//! Stacks are named, colored tags that content items embed by value.
//!
//! - **`db`** - Registry operations (create, list, update, delete, resolve)
//! - **`handlers`** - HTTP handlers for `/stacks`
//!
//! Stack routes are public; they sit outside the authentication middleware.

/// Stack registry database operations
pub mod db;

/// HTTP handlers for stack endpoints
pub mod handlers;

pub use db::{create_stack, delete_stack, list_stacks, resolve_stacks, update_stack, StackError};
