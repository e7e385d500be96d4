use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shared::inbound::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.current_user.get().await {
        Ok(Some(user)) => Json(user).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "No current user set"),
        Err(error) => {
            tracing::error!(%error, "failed to read current user");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
