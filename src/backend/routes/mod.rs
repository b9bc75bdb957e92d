//! Route Configuration Module
//!
//! - **`router`** - Main router creation, welcome route and fallback
//! - **`api_routes`** - Auth and user profile endpoints
//!
//! ```text
//! GET  /                -> 200 welcome
//! POST /auth/register   -> 201 | 422 | 400
//! POST /auth/login      -> 200 token | 404 | 422 | 400
//! GET  /user/{id}       -> 200 profile | 401 | 400 | 403 | 404
//! *                     -> 404
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
