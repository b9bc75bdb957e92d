//! Middleware Module
//!
//! HTTP middleware applied in front of handlers.
//!
//! - **`auth`** - Bearer token gate for protected routes

pub mod auth;

pub use auth::{check_bearer, require_token, AuthDenial, AuthResult, AuthUser, AuthenticatedUser};
