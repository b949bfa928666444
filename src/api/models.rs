use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::core::errors::RosterioError;

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub is_active: Option<bool>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    pub is_active: bool,
}

// Error response struct, also decoded by the HTTP client
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for RosterioError to implement IntoResponse
pub struct ApiError(pub RosterioError);

impl From<RosterioError> for ApiError {
    fn from(err: RosterioError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self.0 {
            RosterioError::UserNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("User {} not found", id))
            }
            RosterioError::InvalidEmail(email) => {
                (StatusCode::BAD_REQUEST, format!("Invalid email: {}", email))
            }
            RosterioError::InvalidInput(field, err) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid input for {}: {}", field, err.description),
            ),
            RosterioError::StorageError(msg) => {
                error!("storage fault: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Storage error: {}", msg))
            }
            // Client-side variants, never produced by handlers
            RosterioError::RejectedInput(msg) => (StatusCode::BAD_REQUEST, msg),
            RosterioError::TransportError(msg) => (StatusCode::BAD_GATEWAY, msg),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
