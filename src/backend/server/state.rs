/**
 * Application State Management
 *
 * `AppState` is the only state handlers see. It is built once from
 * `AppConfig` and cloned per request; every field is either immutable or an
 * `Arc` to something immutable.
 *
 * The `FromRef` implementations let handlers extract just the part they
 * need, e.g. `State(tokens): State<Arc<TokenService>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserRepository;
use crate::backend::server::config::AppConfig;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// User store
    pub users: Arc<dyn UserRepository>,

    /// Token issuer/verifier bound to the configured secret
    pub tokens: Arc<TokenService>,

    /// bcrypt hasher with the configured cost
    pub passwords: PasswordHasher,

    /// Limit profile reads to the token's own user
    pub require_token_owner: bool,
}

impl AppState {
    pub fn new(config: &AppConfig, users: Arc<dyn UserRepository>) -> Self {
        Self {
            users,
            tokens: Arc::new(TokenService::new(&config.secret, config.token_ttl_secs)),
            passwords: PasswordHasher::new(config.bcrypt_cost),
            require_token_owner: config.require_token_owner,
        }
    }
}

impl FromRef<AppState> for Arc<dyn UserRepository> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords
    }
}
