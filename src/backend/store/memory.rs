/**
 * In-Memory User Store
 *
 * A `HashMap` behind a tokio `RwLock`. The email uniqueness check and the
 * insert happen under the same write lock, so this store never admits two
 * users with one email even when registrations race.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, StoreError, User, UserProfile, UserRepository};

/// User store kept in process memory
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.users.read().await.get(id).map(User::profile))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|user| user.email == new_user.email) {
            return Err(StoreError::DuplicateEmail(new_user.email));
        }

        let user = User {
            id: Uuid::new_v4().simple().to_string(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
        };
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }
}
