//! Authentication Module
//!
//! User registration, credential login and token-gated profile reads.
//!
//! # Architecture
//!
//! - **`users`** - User model and the `UserRepository` seam
//! - **`password`** - bcrypt hashing off the async runtime
//! - **`sessions`** - JWT issue and verify (`{"id": ...}` claim)
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password, confirmPassword → user stored with a bcrypt hash
//! 2. **Login**: email, password → hash verified → token returned
//! 3. **Profile**: `Authorization: Bearer <token>` → token verified → profile returned
//!
//! # Security
//!
//! - Only the bcrypt hash is stored; it never appears in a response
//! - Tokens are HS256 signed with the configured secret
//! - Tokens carry no expiry unless a TTL is configured

/// User data model and repository trait
pub mod users;

/// bcrypt password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_user, login, register};
pub use password::PasswordHasher;
pub use sessions::{Claims, TokenService};
pub use users::{NewUser, StoreError, User, UserProfile, UserRepository};
