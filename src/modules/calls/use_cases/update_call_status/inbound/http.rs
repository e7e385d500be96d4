use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shared::inbound::http::StatusUpdateBody;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(call_id): Path<String>,
    body: Result<Json<StatusUpdateBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.calls.update_status(&call_id, body.status).await {
        Ok(call) => Json(call).into_response(),
        Err(error) => error.into_response(),
    }
}
