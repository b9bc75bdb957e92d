/**
 * MongoDB User Store
 *
 * Users live in the `users` collection as `{ _id, name, email, password }`
 * documents. A unique index on `email` is created when the store connects;
 * a duplicate-key write error from it surfaces as
 * `StoreError::DuplicateEmail`.
 */

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::{NewUser, StoreError, User, UserProfile, UserRepository};

/// Collection holding user documents
pub const USERS_COLLECTION: &str = "users";

/// Server error code for a unique index violation
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Document shape in the `users` collection
///
/// `password` is optional so projections that exclude it still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    password: Option<String>,
}

impl UserDocument {
    fn into_profile(self) -> UserProfile {
        UserProfile {
            id: self.id.to_hex(),
            name: self.name,
            email: self.email,
        }
    }

    fn into_user(self) -> Result<User, StoreError> {
        let password_hash = self.password.ok_or_else(|| {
            StoreError::backend(format!("user {} has no password hash", self.id.to_hex()))
        })?;
        Ok(User {
            id: self.id.to_hex(),
            name: self.name,
            email: self.email,
            password_hash,
        })
    }
}

/// User store backed by a MongoDB collection
#[derive(Debug, Clone)]
pub struct MongoUserRepository {
    users: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Connect, check the server answers, and ensure the email index exists
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(StoreError::backend)?;
        let db = client.database(database);

        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(StoreError::backend)?;

        let repository = Self::from_database(&db);
        repository.ensure_indexes().await?;
        Ok(repository)
    }

    /// Wrap the `users` collection of `db` without touching the server
    pub fn from_database(db: &Database) -> Self {
        Self {
            users: db.collection(USERS_COLLECTION),
        }
    }

    async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.users
            .create_index(email_index)
            .await
            .map_err(StoreError::backend)?;
        tracing::debug!("Unique email index ensured on {}", USERS_COLLECTION);
        Ok(())
    }
}

fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<UserProfile>, StoreError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            tracing::debug!("Not an ObjectId, treating as absent: {}", id);
            return Ok(None);
        };

        let document = self
            .users
            .find_one(doc! { "_id": object_id })
            .projection(doc! { "password": 0 })
            .await
            .map_err(StoreError::backend)?;

        Ok(document.map(UserDocument::into_profile))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.users
            .find_one(doc! { "email": email })
            .await
            .map_err(StoreError::backend)?
            .map(UserDocument::into_user)
            .transpose()
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let document = UserDocument {
            id: ObjectId::new(),
            name: new_user.name,
            email: new_user.email,
            password: Some(new_user.password_hash),
        };

        match self.users.insert_one(&document).await {
            Ok(_) => document.into_user(),
            Err(err) if is_duplicate_key(&err) => Err(StoreError::DuplicateEmail(document.email)),
            Err(err) => Err(StoreError::backend(err)),
        }
    }
}
