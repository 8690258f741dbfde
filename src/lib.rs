//! CMS Server - Main Library
//!
//! A content-management backend: users register and sign in, then manage
//! content items tagged with reusable "stacks" (named, colored labels).
//!
//! # Module Structure
//!
//! - **`shared`** - API types: `Stack`, `Content`, request fields, messages
//! - **`backend`** - Axum server (only compiled with the `ssr` feature)
//!   - Credential store and session tokens (`backend::auth`)
//!   - Cookie authentication middleware (`backend::middleware`)
//!   - Stack registry (`backend::stacks`)
//!   - Content store and orchestration (`backend::content`)
//!   - Configuration, database, startup (`backend::server`)
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Server code, including Axum, bcrypt and JWT
//!
//! # Usage
//!
//! ```rust,no_run
//! use cms_server::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Consistency Model
//!
//! - Usernames and stack names are unique by index, so concurrent duplicates
//!   cannot both be written.
//! - Content embeds copies of its stacks. Editing or deleting a stack later
//!   does not change existing content.
//! - Content edits and deletes match on both the record and the owner in one
//!   statement.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
