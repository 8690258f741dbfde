/**
 * Content and Stack Data Structures
 *
 * This module defines the Stack and Content types returned by the HTTP API.
 * Both are shared between the server and any client that consumes the JSON.
 *
 * A Content item embeds copies of the stacks it was tagged with at write time.
 * The copies are values, not references: editing or deleting a Stack later
 * never changes content that already embeds it.
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, colored category tag
///
/// # Example
/// ```rust
/// use cms_server::shared::Stack;
///
/// let stack = Stack::new("rust", "orange");
/// assert_eq!(stack.name, "rust");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Stack {
    /// Unique stack ID
    pub id: Uuid,
    /// Stack name, unique across all stacks
    pub name: String,
    /// Display color
    pub color: String,
}

impl Stack {
    /// Create a stack with a fresh ID
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// A user-owned content item
///
/// `stack` holds the snapshots resolved when the item was created or last
/// edited, in the order the client requested them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Content {
    /// Unique content ID
    pub id: Uuid,
    /// Owner, always taken from the authenticated session
    #[serde(rename = "user_id")]
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    /// Canonical URL
    pub url: String,
    /// Image URL
    #[serde(rename = "imgUrl")]
    pub img_url: String,
    /// Embedded stack snapshots
    pub stack: Vec<Stack>,
}

/// Client-editable content fields
///
/// Used as the request body for both creating and editing content. `stack`
/// carries stack *names*; the server resolves them to full snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentFields {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(rename = "imgUrl")]
    pub img_url: String,
    /// Stack names to resolve
    #[serde(default)]
    pub stack: Vec<String>,
}
