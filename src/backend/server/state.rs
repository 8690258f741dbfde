/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * `AppState` holds:
 * - the persistence handle (`Database`, a cloneable pool wrapper)
 * - the token service, shared behind an `Arc`
 * - the bcrypt cost used for new passwords
 *
 * Handlers that only need one part extract it directly, e.g.
 * `State<Database>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenService;
use crate::backend::server::database::Database;

/// Application state shared by every handler
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
    pub tokens: Arc<TokenService>,
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(db: Database, tokens: TokenService, bcrypt_cost: u32) -> Self {
        Self {
            db,
            tokens: Arc::new(tokens),
            bcrypt_cost,
        }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
