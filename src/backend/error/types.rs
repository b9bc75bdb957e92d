/**
 * Backend Error Types
 *
 * Every failure a handler can report, with the HTTP status it maps to.
 *
 * # Error Categories
 *
 * - Validation (422) - missing or mismatched fields, taken email, wrong password
 * - Not found (404) - unknown user
 * - Missing token (401) / invalid token (400)
 * - Malformed body (400)
 * - Forbidden (403) - token owner check, when enabled
 * - Internal (500) - store, hashing and signing failures; the source is
 *   logged and never sent to the client
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::StoreError;

/// Message returned with every 500 response
pub const SERVER_ERROR_MESSAGE: &str = "Erro no servidor, tente novamente mais tarde!";

/// Message returned when the Authorization header carries no token
pub const ACCESS_DENIED_MESSAGE: &str = "Acesso negado!";

/// Message returned when a token fails verification
pub const INVALID_TOKEN_MESSAGE: &str = "token invalido";

/// Message returned when the email is already taken
pub const EMAIL_TAKEN_MESSAGE: &str = "Email já cadastrado";

/// Message returned when no user matches
pub const USER_NOT_FOUND_MESSAGE: &str = "Usuario nao encontrado";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Client input failed a check; the message names what is wrong
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// No bearer token was presented
    #[error("Missing token")]
    MissingToken,

    /// A token was presented but did not verify
    #[error("Invalid token")]
    InvalidToken,

    /// The body could not be parsed as the expected JSON
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The token is valid but belongs to another user
    #[error("Forbidden")]
    Forbidden,

    /// Store, hashing or signing failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(source: impl std::fmt::Display) -> Self {
        Self::Internal(source.to_string())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::InvalidToken | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client
    ///
    /// Internal errors always yield the generic server message.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(message) | Self::NotFound(message) | Self::BadRequest(message) => {
                message.clone()
            }
            Self::MissingToken => ACCESS_DENIED_MESSAGE.to_string(),
            Self::InvalidToken => INVALID_TOKEN_MESSAGE.to_string(),
            Self::Forbidden => ACCESS_DENIED_MESSAGE.to_string(),
            Self::Internal(_) => SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail(_) => Self::validation(EMAIL_TAKEN_MESSAGE),
            StoreError::Backend(_) => Self::internal(err),
        }
    }
}

impl From<PasswordError> for BackendError {
    fn from(err: PasswordError) -> Self {
        Self::internal(err)
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        Self::internal(err)
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
