/**
 * Server Initialization
 *
 * This module builds the application from a loaded configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and run migrations
 * 2. Build the token service from the signing secret
 * 3. Create the app state
 * 4. Create and configure the router
 *
 * Unlike optional services, the database is required: a connection or
 * migration failure aborts startup.
 */

use axum::Router;

use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::database::{Database, StoreError};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router, StoreError> {
    tracing::info!("Initializing CMS backend server");

    let db = Database::connect(&config.database_url, config.db_timeout).await?;
    let tokens = TokenService::new(&config.jwt_secret);
    let state = AppState::new(db, tokens, config.bcrypt_cost);

    let app = create_router(state);
    tracing::info!("Router configured");

    Ok(app)
}
