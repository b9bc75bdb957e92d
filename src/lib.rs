//! authapi - Main Library
//!
//! authapi is a small authentication API built on Axum. Users register with a
//! name, email and password, log in to receive a bearer token, and use that
//! token to read user profiles.
//!
//! # Overview
//!
//! - Password hashing with bcrypt (cost 12 by default)
//! - HS256 JWT bearer tokens carrying the user id
//! - User records in a MongoDB collection (or in memory for local runs)
//! - JSON responses of the form `{"msg": ...}`
//!
//! # Module Structure
//!
//! - **`backend`** - Everything server-side
//!   - `server` - configuration, application state, app construction
//!   - `routes` - router assembly
//!   - `auth` - hashing, tokens, user model, HTTP handlers
//!   - `store` - user repository implementations
//!   - `middleware` - bearer token gate
//!   - `error` - error type and HTTP conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use authapi::backend::server::{config::AppConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Backend server-side code
pub mod backend;
