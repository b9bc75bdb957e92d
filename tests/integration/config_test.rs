//! Configuration from the process environment
//!
//! These tests mutate process-wide environment variables and run serially.

use authapi::backend::server::config::{AppConfig, ConfigError, StoreBackend};
use authapi::backend::server::init::create_app;
use axum::http::StatusCode;
use axum_test::TestServer;
use serial_test::serial;

const KEYS: &[&str] = &[
    "SECRET",
    "USER_STORE",
    "DB_USER",
    "DB_PASS",
    "DB_CLUSTER",
    "DB_NAME",
    "SERVER_HOST",
    "SERVER_PORT",
    "BCRYPT_COST",
    "TOKEN_TTL_SECS",
    "REQUIRE_TOKEN_OWNER",
];

fn clear_env() {
    for key in KEYS {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_requires_secret() {
    clear_env();
    std::env::set_var("USER_STORE", "memory");

    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::MissingValue("SECRET"));

    clear_env();
}

#[test]
#[serial]
fn test_from_env_memory_store() {
    clear_env();
    std::env::set_var("SECRET", "env-secret");
    std::env::set_var("USER_STORE", "memory");
    std::env::set_var("SERVER_PORT", "4000");
    std::env::set_var("BCRYPT_COST", "4");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.secret, "env-secret");
    assert!(matches!(config.store, StoreBackend::Memory));
    assert_eq!(config.port, 4000);
    assert_eq!(config.bcrypt_cost, 4);
    assert_eq!(config.token_ttl_secs, None);
    assert!(!config.require_token_owner);

    clear_env();
}

#[tokio::test]
#[serial]
async fn test_create_app_from_env() {
    clear_env();
    std::env::set_var("SECRET", "env-secret");
    std::env::set_var("USER_STORE", "memory");
    std::env::set_var("BCRYPT_COST", "4");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    let app = create_app(config).await.unwrap();
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}
