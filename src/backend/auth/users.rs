/**
 * User Model and Repository
 *
 * This module defines the user records handled by the auth flow and the
 * repository trait every user store implements. The concrete stores live in
 * `backend::store`.
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stored user, including the password hash
///
/// Never serialized into a response; handlers return `UserProfile` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-assigned identifier
    pub id: String,
    pub name: String,
    /// Unique across all users
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
}

impl User {
    /// Profile view of this user, without the password hash
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// User fields supplied at registration, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// User as returned by the profile endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// User store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another user already holds this email
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// Any other backend failure (connection, serialization, ...)
    #[error("store error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(message: impl std::fmt::Display) -> Self {
        Self::Backend(message.to_string())
    }
}

/// Persistence operations the auth handlers need
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by id, without the password hash
    ///
    /// Ids the store cannot interpret resolve to `None`.
    async fn find_by_id(&self, id: &str) -> Result<Option<UserProfile>, StoreError>;

    /// Look up a user by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Persist a new user and return it with its assigned id
    ///
    /// Fails with `StoreError::DuplicateEmail` when the email is taken.
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError>;
}
