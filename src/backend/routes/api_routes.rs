/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - User login, returns a token
 *
 * ## Users
 * - `GET /user/{id}` - User profile (requires a token)
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{get_user, login, register};
use crate::backend::middleware::require_token;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// `/auth/*` routes are public. `/user/{id}` runs behind `require_token`,
/// which rejects the request before the handler sees it when the token is
/// missing (401) or does not verify (400).
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    router
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route(
            "/user/{id}",
            get(get_user).route_layer(middleware::from_fn_with_state(
                app_state.clone(),
                require_token,
            )),
        )
}
