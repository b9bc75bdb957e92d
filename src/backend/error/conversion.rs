/**
 * Error Conversion
 *
 * `BackendError` implements Axum's `IntoResponse`, so handlers return it
 * directly. The body is always `{"msg": "..."}`.
 */

use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let Self::Internal(source) = &self {
            tracing::error!("Request failed: {}", source);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }

        (status, Json(json!({ "msg": self.message() }))).into_response()
    }
}
