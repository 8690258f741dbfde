//! Shared Module
//!
//! This module contains the API types used on both sides of the HTTP
//! boundary: the Stack and Content payloads, confirmation messages and the
//! input validation errors. Nothing in here touches the network or the
//! database.

/// Stack and Content data structures
pub mod content;

/// Shared error types
pub mod error;

/// Confirmation response body
pub mod message;

/// Re-export commonly used types for convenience
pub use content::{Content, ContentFields, Stack};
pub use error::SharedError;
pub use message::MessageResponse;
