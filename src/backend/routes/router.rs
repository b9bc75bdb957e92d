/**
 * Router Configuration
 *
 * Combines the public welcome route, the API routes and the fallback into a
 * single Axum router.
 *
 * # Route Order
 *
 * 1. `GET /` - welcome message
 * 2. API routes (auth, user profile)
 * 3. Fallback - `404 {"msg": "Rota nao encontrada"}`
 *
 * Every request, fallback included, is traced by `TraceLayer`.
 */

use axum::{response::Json, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::auth::handlers::types::{MessageResponse, WELCOME_MESSAGE};
use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Message returned for any unknown path
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Rota nao encontrada";

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(welcome));

    let router = configure_api_routes(router, &app_state);

    router
        .fallback(route_not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

/// GET /
async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME_MESSAGE))
}

async fn route_not_found() -> BackendError {
    BackendError::not_found(ROUTE_NOT_FOUND_MESSAGE)
}
