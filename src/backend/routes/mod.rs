//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - Router assembly and middleware layers
//! - **`api_routes`** - Public and private endpoint tables
//!
//! # Example
//!
//! ```rust,no_run
//! use cms_server::backend::auth::sessions::{SigningSecret, TokenService};
//! use cms_server::backend::routes::create_router;
//! use cms_server::backend::server::{AppState, Database};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::in_memory().await?;
//! let tokens = TokenService::new(&SigningSecret::new("secret"));
//! let router = create_router(AppState::new(db, tokens, bcrypt::DEFAULT_COST));
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Endpoint tables
pub mod api_routes;

pub use router::create_router;
