//! Authentication Module
//!
//! This module handles user registration, credential checks and session
//! tokens.
//!
//! # Architecture
//!
//! - **`users`** - Credential store: users and their bcrypt hashes
//! - **`sessions`** - Token service: issues and verifies 24 hour HS256 tokens
//! - **`handlers`** - HTTP handlers for register, login and logout
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and credential store
//! ├── sessions.rs     - Session token service
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Session tokens are stateless; verification never reads the database
//! - Invalid credentials return 401 without saying which part was wrong

/// User data model and credential store
pub mod users;

/// Session token issuance and verification
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, logout, register, LoginRequest, RegisterRequest};
pub use sessions::{SessionClaim, SigningSecret, TokenError, TokenService};
pub use users::{CredentialError, User};
