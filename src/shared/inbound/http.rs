use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::shared::core::status::Status;
use crate::shared::infrastructure::record_store::StoreError;

/// Error body returned to clients: `{"detail": "..."}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDetail {
            detail: detail.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            StoreError::NotFound { .. } => error_response(StatusCode::NOT_FOUND, self.to_string()),
            StoreError::Duplicate { .. } => error_response(StatusCode::CONFLICT, self.to_string()),
            StoreError::Backend(reason) => {
                tracing::error!(%reason, "record store failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateBody {
    pub status: Status,
}
