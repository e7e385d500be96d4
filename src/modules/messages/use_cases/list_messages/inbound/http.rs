use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.messages.list().await {
        Ok(messages) => Json(messages).into_response(),
        Err(error) => error.into_response(),
    }
}
