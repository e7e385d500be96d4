use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::current_user::core::current_user::{CurrentUser, NewCurrentUser};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<NewCurrentUser>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.current_user.set(CurrentUser::from(body)).await {
        Ok(user) => Json(user).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to set current user");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
