use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::solicitudes::use_cases::list_solicitudes::handler::list_solicitudes;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match list_solicitudes(&state).await {
        Ok(solicitudes) => Json(solicitudes).into_response(),
        Err(error) => error.into_response(),
    }
}
