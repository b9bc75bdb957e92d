//! Profile API integration tests
//!
//! `GET /user/{id}` behind the token gate.

use authapi::backend::auth::sessions::{Claims, TokenService};
use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use serde_json::json;

use crate::assert_msg;
use crate::common::{
    auth_header, create_test_user, create_unique_test_user, spawn_app, spawn_app_with, test_config,
};

#[tokio::test]
async fn test_full_flow() {
    let app = spawn_app();
    let user = create_test_user(&app.server, "A", "a@x.com", "p1").await;

    let (name, value) = auth_header(&user.token);
    let response = app
        .server
        .get(&format!("/user/{}", user.id))
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    pretty_assertions::assert_eq!(
        body,
        json!({ "user": { "_id": user.id, "name": "A", "email": "a@x.com" } })
    );
}

#[tokio::test]
async fn test_profile_never_exposes_password() {
    let app = spawn_app();
    let user = create_unique_test_user(&app.server).await;

    let (name, value) = auth_header(&user.token);
    let response = app
        .server
        .get(&format!("/user/{}", user.id))
        .add_header(name, value)
        .await;

    let text = response.text();
    assert!(!text.contains("password"));
    assert!(!text.contains(&user.password));
    assert!(!text.contains("$2"));
}

#[tokio::test]
async fn test_profile_without_token() {
    let app = spawn_app();
    let user = create_unique_test_user(&app.server).await;

    let response = app.server.get(&format!("/user/{}", user.id)).await;

    assert_msg!(response, StatusCode::UNAUTHORIZED, "Acesso negado!");
}

#[tokio::test]
async fn test_profile_scheme_without_token() {
    let app = spawn_app();
    let user = create_unique_test_user(&app.server).await;

    let response = app
        .server
        .get(&format!("/user/{}", user.id))
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer"))
        .await;

    assert_msg!(response, StatusCode::UNAUTHORIZED, "Acesso negado!");
}

#[tokio::test]
async fn test_profile_garbage_token() {
    let app = spawn_app();
    let user = create_unique_test_user(&app.server).await;

    let response = app
        .server
        .get(&format!("/user/{}", user.id))
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer garbage"))
        .await;

    assert_msg!(response, StatusCode::BAD_REQUEST, "token invalido");
}

#[tokio::test]
async fn test_profile_token_from_other_secret() {
    let app = spawn_app();
    let user = create_unique_test_user(&app.server).await;
    let forged = TokenService::new("some-other-secret", None)
        .issue(&user.id)
        .unwrap();

    let (name, value) = auth_header(&forged);
    let response = app
        .server
        .get(&format!("/user/{}", user.id))
        .add_header(name, value)
        .await;

    assert_msg!(response, StatusCode::BAD_REQUEST, "token invalido");
}

#[tokio::test]
async fn test_profile_unknown_id() {
    let app = spawn_app();
    let user = create_unique_test_user(&app.server).await;

    let (name, value) = auth_header(&user.token);
    let response = app
        .server
        .get("/user/64b7f0c2e4b0a1a2b3c4d5e6")
        .add_header(name, value)
        .await;

    assert_msg!(response, StatusCode::NOT_FOUND, "Usuario nao encontrado");
}

#[tokio::test]
async fn test_profile_of_other_user_allowed_by_default() {
    let app = spawn_app();
    let alice = create_test_user(&app.server, "Alice", "alice@x.com", "p1").await;
    let bob = create_test_user(&app.server, "Bob", "bob@x.com", "p2").await;

    let (name, value) = auth_header(&alice.token);
    let response = app
        .server
        .get(&format!("/user/{}", bob.id))
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["email"], "bob@x.com");
}

#[tokio::test]
async fn test_profile_of_other_user_with_owner_check() {
    let app = spawn_app_with(test_config().require_token_owner(true));
    let alice = create_test_user(&app.server, "Alice", "alice@x.com", "p1").await;
    let bob = create_test_user(&app.server, "Bob", "bob@x.com", "p2").await;

    let (name, value) = auth_header(&alice.token);
    let response = app
        .server
        .get(&format!("/user/{}", bob.id))
        .add_header(name, value)
        .await;
    assert_msg!(response, StatusCode::FORBIDDEN, "Acesso negado!");

    let (name, value) = auth_header(&alice.token);
    let response = app
        .server
        .get(&format!("/user/{}", alice.id))
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_token_with_ttl_accepted() {
    let app = spawn_app_with(test_config().token_ttl_secs(60));
    let user = create_unique_test_user(&app.server).await;

    let (name, value) = auth_header(&user.token);
    let response = app
        .server
        .get(&format!("/user/{}", user.id))
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = spawn_app_with(test_config().token_ttl_secs(60));
    let user = create_unique_test_user(&app.server).await;

    let expired = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &Claims {
            id: user.id.clone(),
            exp: Some(1),
        },
        &jsonwebtoken::EncodingKey::from_secret(app.config.secret.as_bytes()),
    )
    .unwrap();

    let (name, value) = auth_header(&expired);
    let response = app
        .server
        .get(&format!("/user/{}", user.id))
        .add_header(name, value)
        .await;

    assert_msg!(response, StatusCode::BAD_REQUEST, "token invalido");
}
