/**
 * Login Handler
 *
 * POST /auth/login
 *
 * # Authentication Process
 *
 * 1. Require email and password
 * 2. Look up the user by email (404 when absent)
 * 3. Verify the password with bcrypt (422 when wrong)
 * 4. Issue a token carrying the user id
 *
 * Passwords are never logged or returned.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{
    body_or_empty, required, LoginRequest, LoginResponse, EMAIL_REQUIRED, LOGIN_SUCCEEDED,
    PASSWORD_REQUIRED, WRONG_PASSWORD,
};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserRepository;
use crate::backend::error::types::USER_NOT_FOUND_MESSAGE;
use crate::backend::error::BackendError;

/// Login handler
///
/// # Errors
///
/// * `422 Unprocessable Entity` - missing field or wrong password
/// * `404 Not Found` - no user with this email
/// * `400 Bad Request` - JSON body does not parse, or a field is an array/object
/// * `500 Internal Server Error` - store, bcrypt or signing failure
///
/// # Example Response
///
/// ```json
/// {
///   "msg": "Autenticação realizada com sucesso",
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(users): State<Arc<dyn UserRepository>>,
    State(passwords): State<PasswordHasher>,
    State(tokens): State<Arc<TokenService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, BackendError> {
    let request = body_or_empty(payload)?;

    let email = required(&request.email, EMAIL_REQUIRED)?;
    let password = required(&request.password, PASSWORD_REQUIRED)?;

    tracing::info!("Login request for: {}", email);

    let user = users.find_by_email(email).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", email);
        BackendError::not_found(USER_NOT_FOUND_MESSAGE)
    })?;

    if !passwords.verify(password, &user.password_hash).await? {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(BackendError::validation(WRONG_PASSWORD));
    }

    let token = tokens.issue(&user.id)?;

    tracing::info!("User logged in successfully: {} ({})", user.id, user.email);

    Ok(Json(LoginResponse {
        msg: LOGIN_SUCCEEDED.to_string(),
        token,
    }))
}
