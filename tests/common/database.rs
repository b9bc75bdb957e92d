//! MongoDB test fixtures
//!
//! Tests against a real server run only when `MONGODB_URI` is set. Each
//! fixture works in its own throwaway database, dropped by `cleanup`.

use std::sync::Arc;

use authapi::backend::auth::users::UserRepository;
use authapi::backend::server::init::create_app_with_store;
use authapi::backend::store::MongoUserRepository;
use axum_test::TestServer;
use mongodb::Client;

use super::server::test_config;

/// Environment variable naming the server used by database tests
pub const MONGODB_URI_VAR: &str = "MONGODB_URI";

/// Test database fixture
///
/// Holds a repository connected to a uniquely named database.
pub struct TestDatabase {
    client: Client,
    name: String,
    repository: MongoUserRepository,
}

impl TestDatabase {
    /// Connect to `MONGODB_URI`, or `None` when it is unset
    pub async fn connect() -> Option<Self> {
        let Ok(uri) = std::env::var(MONGODB_URI_VAR) else {
            eprintln!("{} not set, skipping MongoDB test", MONGODB_URI_VAR);
            return None;
        };

        let name = format!("authapi_test_{}", uuid::Uuid::new_v4().simple());
        let repository = MongoUserRepository::connect(&uri, &name)
            .await
            .expect("Failed to connect to test database");
        let client = Client::with_uri_str(&uri)
            .await
            .expect("Failed to create cleanup client");

        Some(Self {
            client,
            name,
            repository,
        })
    }

    /// Get the repository
    pub fn repository(&self) -> &MongoUserRepository {
        &self.repository
    }

    /// Test server whose routes use this database
    pub fn server(&self) -> TestServer {
        let config = test_config().build().expect("test config should be valid");
        let store: Arc<dyn UserRepository> = Arc::new(self.repository.clone());
        let app = create_app_with_store(&config, store);
        TestServer::new(app).expect("Failed to create test server")
    }

    /// Drop the test database
    pub async fn cleanup(self) {
        self.client
            .database(&self.name)
            .drop()
            .await
            .expect("Failed to drop test database");
    }
}
