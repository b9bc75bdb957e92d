/**
 * Register Handler
 *
 * POST /auth/register
 *
 * # Registration Process
 *
 * 1. Require name, email and password (non-empty, checked in that order)
 * 2. Require confirmPassword to equal password
 * 3. Reject an email that is already registered
 * 4. Hash the password with bcrypt
 * 5. Insert the user
 *
 * The existence check in step 3 and the insert in step 5 are not atomic. The
 * store enforces email uniqueness on its own, and a duplicate it rejects
 * produces the same 422 as step 3.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{
    body_or_empty, required, MessageResponse, RegisterRequest, EMAIL_REQUIRED, NAME_REQUIRED,
    PASSWORDS_DIFFER, PASSWORD_REQUIRED, USER_CREATED,
};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::users::{NewUser, UserRepository};
use crate::backend::error::types::EMAIL_TAKEN_MESSAGE;
use crate::backend::error::BackendError;

/// Register handler
///
/// # Errors
///
/// * `422 Unprocessable Entity` - missing field, password mismatch, email taken
/// * `400 Bad Request` - JSON body does not parse, or a field is an array/object
/// * `500 Internal Server Error` - hashing or store failure
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "A", "email": "a@x.com", "password": "p1", "confirmPassword": "p1"}
/// ```
pub async fn register(
    State(users): State<Arc<dyn UserRepository>>,
    State(passwords): State<PasswordHasher>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    let request = body_or_empty(payload)?;

    let name = required(&request.name, NAME_REQUIRED)?;
    let email = required(&request.email, EMAIL_REQUIRED)?;
    let password = required(&request.password, PASSWORD_REQUIRED)?;

    if request.confirm_password.as_deref() != Some(password) {
        return Err(BackendError::validation(PASSWORDS_DIFFER));
    }

    tracing::info!("Register request for email: {}", email);

    if users.find_by_email(email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(BackendError::validation(EMAIL_TAKEN_MESSAGE));
    }

    let password_hash = passwords.hash(password).await?;

    let user = users
        .insert(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        })
        .await?;

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok((StatusCode::CREATED, Json(MessageResponse::new(USER_CREATED))))
}
