//! MongoDB user store tests
//!
//! Run with `MONGODB_URI=mongodb://localhost:27017 cargo test`.

use authapi::backend::auth::users::{NewUser, StoreError, UserRepository};
use axum::http::StatusCode;
use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::common::database::TestDatabase;
use crate::common::{auth_header, create_test_user};

fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "A".to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$hash".to_string(),
    }
}

#[tokio::test]
async fn test_insert_then_find_by_email() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let users = db.repository();

    let inserted = users.insert(new_user("a@x.com")).await.unwrap();
    assert!(ObjectId::parse_str(&inserted.id).is_ok());

    let found = users.find_by_email("a@x.com").await.unwrap();
    assert_eq!(found, Some(inserted));
    assert_eq!(users.find_by_email("b@x.com").await.unwrap(), None);

    db.cleanup().await;
}

#[tokio::test]
async fn test_find_by_id_omits_password() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let users = db.repository();

    let inserted = users.insert(new_user("a@x.com")).await.unwrap();
    let profile = users
        .find_by_id(&inserted.id)
        .await
        .unwrap()
        .expect("inserted user should be found by id");

    assert_eq!(profile, inserted.profile());
    let body = serde_json::to_value(&profile).unwrap();
    assert!(body.get("password").is_none());

    db.cleanup().await;
}

#[tokio::test]
async fn test_find_by_id_unknown_or_malformed() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let users = db.repository();

    let unknown = ObjectId::new().to_hex();
    assert_eq!(users.find_by_id(&unknown).await.unwrap(), None);
    assert_eq!(users.find_by_id("not-an-oid").await.unwrap(), None);

    db.cleanup().await;
}

#[tokio::test]
async fn test_duplicate_email_rejected_by_index() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let users = db.repository();

    users.insert(new_user("a@x.com")).await.unwrap();
    let err = users.insert(new_user("a@x.com")).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateEmail(email) if email == "a@x.com"));

    db.cleanup().await;
}

#[tokio::test]
async fn test_full_flow_on_mongodb() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let server = db.server();
    let user = create_test_user(&server, "A", "a@x.com", "p1").await;

    let (name, value) = auth_header(&user.token);
    let response = server
        .get(&format!("/user/{}", user.id))
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    pretty_assertions::assert_eq!(
        body,
        json!({ "user": { "_id": user.id, "name": "A", "email": "a@x.com" } })
    );

    db.cleanup().await;
}
