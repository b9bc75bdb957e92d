//! Backend Module
//!
//! This module contains all server-side code: the Axum application, the
//! authentication flow and the user store.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app construction
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, JWT tokens, user model, handlers
//! - **`store`** - MongoDB and in-memory user repositories
//! - **`middleware`** - Bearer token gate for protected routes
//! - **`error`** - Backend error type and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── store/          - User repositories
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the user repository, the token service and the password
//! hasher. It is built once from `AppConfig` at startup and cloned into every
//! handler. Nothing in it is mutable; all user data lives in the store.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// User repository implementations
pub mod store;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;
pub use server::config::AppConfig;
pub use server::state::AppState;
