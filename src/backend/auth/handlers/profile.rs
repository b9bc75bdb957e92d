/**
 * Profile Handler
 *
 * GET /user/{id}
 *
 * Runs behind `require_token`, so the request already carries a verified
 * identity. The profile returned is the one named in the path and never
 * includes the password hash.
 *
 * When the owner check is enabled a token may only read its own profile
 * (403 otherwise). With the check off, any valid token can read any profile.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::backend::auth::handlers::types::ProfileResponse;
use crate::backend::error::types::USER_NOT_FOUND_MESSAGE;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Get user profile handler
///
/// # Errors
///
/// * `401 Unauthorized` / `400 Bad Request` - rejected by the token gate
/// * `403 Forbidden` - token belongs to another user (owner check only)
/// * `404 Not Found` - no user with this id, or the id is malformed
/// * `500 Internal Server Error` - store failure
///
/// # Example Response
///
/// ```json
/// {"user": {"_id": "64b7f0c2e4b0a1a2b3c4d5e6", "name": "A", "email": "a@x.com"}}
/// ```
pub async fn get_user(
    State(app_state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ProfileResponse>, BackendError> {
    if caller.user_id != id {
        if app_state.require_token_owner {
            tracing::warn!("User {} denied profile of {}", caller.user_id, id);
            return Err(BackendError::Forbidden);
        }
        tracing::debug!("User {} reading profile of {}", caller.user_id, id);
    }

    let user = app_state.users.find_by_id(&id).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", id);
        BackendError::not_found(USER_NOT_FOUND_MESSAGE)
    })?;

    Ok(Json(ProfileResponse { user }))
}
