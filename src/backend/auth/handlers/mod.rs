//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports
//! ├── types.rs     - Request/response types and messages
//! ├── register.rs  - POST /auth/register
//! ├── login.rs     - POST /auth/login
//! └── profile.rs   - GET /user/{id} (behind the token gate)
//! ```
//!
//! Every failure leaves as a `BackendError`, which renders `{"msg": ...}`
//! with the matching status.

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Profile handler
pub mod profile;

pub use types::{LoginRequest, LoginResponse, MessageResponse, ProfileResponse, RegisterRequest};

pub use login::login;
pub use profile::get_user;
pub use register::register;
