//! User Store Module
//!
//! Implementations of `UserRepository`:
//!
//! - **`mongo`** - MongoDB collection `users` with a unique index on `email`
//! - **`memory`** - process-local map for tests and local runs
//!
//! `connect` picks one from the configured `StoreBackend`.

pub mod memory;
pub mod mongo;

use std::sync::Arc;

pub use memory::InMemoryUserRepository;
pub use mongo::MongoUserRepository;

use crate::backend::auth::users::{StoreError, UserRepository};
use crate::backend::server::config::StoreBackend;

/// Open the user store described by `backend`
pub async fn connect(backend: &StoreBackend) -> Result<Arc<dyn UserRepository>, StoreError> {
    match backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory user store; users are lost on restart");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StoreBackend::Mongo {
            cluster, database, ..
        } => {
            let uri = backend
                .connection_uri()
                .ok_or_else(|| StoreError::backend("mongo backend without connection string"))?;
            tracing::info!("Connecting to MongoDB cluster {} (database {})", cluster, database);
            let repository = MongoUserRepository::connect(&uri, database).await?;
            tracing::info!("Conectado ao banco de dados.");
            Ok(Arc::new(repository))
        }
    }
}
