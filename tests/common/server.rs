//! Test server helpers
//!
//! Builds the full router with `create_app_with_store` so tests exercise the
//! same routes, middleware and error rendering as the binary.

use std::sync::Arc;

use authapi::backend::auth::users::UserRepository;
use authapi::backend::server::config::{AppConfig, AppConfigBuilder, MIN_BCRYPT_COST};
use authapi::backend::server::init::create_app_with_store;
use authapi::backend::store::InMemoryUserRepository;
use axum_test::TestServer;

/// Signing secret shared by every test server
pub const TEST_SECRET: &str = "integration-test-secret";

/// Config builder with the lowest bcrypt cost so tests stay fast
pub fn test_config() -> AppConfigBuilder {
    AppConfig::builder(TEST_SECRET).bcrypt_cost(MIN_BCRYPT_COST)
}

/// Server plus a handle on its store
pub struct TestApp {
    pub server: TestServer,
    pub users: Arc<InMemoryUserRepository>,
    pub config: AppConfig,
}

/// Spawn a test server from `builder`
pub fn spawn_app_with(builder: AppConfigBuilder) -> TestApp {
    let config = builder.build().expect("test config should be valid");
    let users = Arc::new(InMemoryUserRepository::new());
    let store: Arc<dyn UserRepository> = users.clone();
    let app = create_app_with_store(&config, store);
    let server = TestServer::new(app).expect("Failed to create test server");

    TestApp {
        server,
        users,
        config,
    }
}

/// Spawn a test server with default test settings
pub fn spawn_app() -> TestApp {
    spawn_app_with(test_config())
}
