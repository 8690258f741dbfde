//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - Credential check, sets the session cookie
//! └── logout.rs    - Clears the session cookie
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register
//! - **`login`** - POST /login
//! - **`logout`** - POST /logout
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email and password → user created
//! 2. **Login**: username and password verified → `token` cookie set for 24 hours
//! 3. **Protected requests**: the browser sends the cookie back; the auth
//!    middleware verifies it
//! 4. **Logout**: the cookie is removed

/// Request types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

pub use types::{LoginRequest, RegisterRequest};

pub use login::login;
pub use logout::logout;
pub use register::register;
