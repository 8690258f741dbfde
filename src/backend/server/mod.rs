//! Server Module
//!
//! This module contains the server-side code for configuring and starting
//! the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Configuration loading from the environment
//! ├── database.rs     - SQLite pool, migrations, per-operation deadline
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use cms_server::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Server configuration loading
pub mod config;

/// Persistence handle
pub mod database;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig, ServerConfigBuilder};
pub use database::{Database, StoreError};
pub use init::create_app;
pub use state::AppState;
