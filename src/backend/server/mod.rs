//! Server Module
//!
//! Configuration, application state and app construction for the Axum
//! server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - AppConfig loading and validation
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env` reads the environment once
//! 2. **Store Connection**: the configured `UserRepository` is opened
//! 3. **State Creation**: `AppState` wraps the store, token service and hasher
//! 4. **Router Creation**: routes, token gate and tracing layer
//!
//! # Example
//!
//! ```rust,no_run
//! use authapi::backend::server::{config::AppConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{create_app, create_app_with_store};
pub use state::AppState;
