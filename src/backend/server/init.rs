/**
 * Server Initialization
 *
 * Builds the Axum application from an `AppConfig`:
 * 1. Open the configured user store
 * 2. Build `AppState` (token service, password hasher)
 * 3. Create the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::users::{StoreError, UserRepository};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::AppConfig;
use crate::backend::server::state::AppState;
use crate::backend::store;

/// Create and configure the Axum application
///
/// Fails when the user store cannot be reached; the server has nothing to
/// serve without it.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing authapi backend");

    let users = store::connect(&config.store).await?;
    Ok(create_app_with_store(&config, users))
}

/// Create the application around an already opened user store
///
/// Tests use this with `InMemoryUserRepository`.
pub fn create_app_with_store(config: &AppConfig, users: Arc<dyn UserRepository>) -> Router<()> {
    let app_state = AppState::new(config, users);
    tracing::debug!(
        "App state ready (bcrypt cost {}, token ttl {:?}, owner check {})",
        app_state.passwords.cost(),
        config.token_ttl_secs,
        app_state.require_token_owner
    );
    create_router(app_state)
}
