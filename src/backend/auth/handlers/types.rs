/**
 * Authentication Handler Types
 *
 * Request bodies, response bodies and the fixed response messages shared by
 * the register, login and profile handlers.
 */

use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::backend::auth::users::UserProfile;
use crate::backend::error::BackendError;

pub const WELCOME_MESSAGE: &str = "Bem-vindo a nossa API - uga";
pub const NAME_REQUIRED: &str = "O nome é obrigatorio!";
pub const EMAIL_REQUIRED: &str = "O email é obrigatorio!";
pub const PASSWORD_REQUIRED: &str = "A senha é obrigatorio!";
pub const PASSWORDS_DIFFER: &str = "As senhas nao conferem";
pub const USER_CREATED: &str = "Usuario criado com sucesso";
pub const WRONG_PASSWORD: &str = "Senha incorreta!";
pub const LOGIN_SUCCEEDED: &str = "Autenticação realizada com sucesso";

/// Register request
///
/// Every field is optional at the parsing level so a missing field produces
/// the field-specific 422 message instead of a parse error. Scalars are read
/// with `lenient_string`.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: Option<String>,
    #[serde(
        default,
        rename = "confirmPassword",
        deserialize_with = "lenient_string"
    )]
    pub confirm_password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: Option<String>,
}

/// `{"msg": ...}` body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Login response carrying the bearer token
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub msg: String,
    pub token: String,
}

/// Profile response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileResponse {
    pub user: UserProfile,
}

/// Read a JSON scalar as a string field
///
/// Numbers and `true` take their JSON text. `null`, `false` and `0` read as
/// absent, so they fail the same check as a missing field. Arrays and objects
/// are rejected.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Bool(true)) => Ok(Some("true".to_string())),
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => Ok(None),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "invalid type: {}, expected a string",
            json_type(&other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "array",
        Value::Object(_) => "object",
        _ => "scalar",
    }
}

/// Unwrap a JSON body, reading a request without a JSON content type as `{}`
///
/// The field checks then answer with their 422 messages. A body that claims
/// to be JSON but does not parse is still a 400.
pub(crate) fn body_or_empty<T: Default>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, BackendError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => {
            tracing::debug!("Request without JSON content type, treating body as empty");
            Ok(T::default())
        }
        Err(rejection) => Err(rejection.into()),
    }
}

/// Return the field value, or a 422 with `message` when absent or empty
pub(crate) fn required<'a>(
    value: &'a Option<String>,
    message: &str,
) -> Result<&'a str, BackendError> {
    match value.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(BackendError::validation(message)),
    }
}
