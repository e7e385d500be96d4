use axum::{
    Router,
    http::HeaderValue,
    routing::{get, put},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::calls::use_cases::list_calls::inbound::http as list_calls_http;
use crate::modules::calls::use_cases::register_call::inbound::http as register_call_http;
use crate::modules::calls::use_cases::update_call_status::inbound::http as update_call_status_http;
use crate::modules::current_user::use_cases::get_current_user::inbound::http as get_current_user_http;
use crate::modules::current_user::use_cases::set_current_user::inbound::http as set_current_user_http;
use crate::modules::messages::use_cases::list_messages::inbound::http as list_messages_http;
use crate::modules::messages::use_cases::register_message::inbound::http as register_message_http;
use crate::modules::messages::use_cases::update_message_status::inbound::http as update_message_status_http;
use crate::modules::solicitudes::use_cases::list_solicitudes::inbound::http as list_solicitudes_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/messages",
            get(list_messages_http::handle).post(register_message_http::handle),
        )
        .route("/messages/{id}", put(update_message_status_http::handle))
        .route(
            "/calls",
            get(list_calls_http::handle).post(register_call_http::handle),
        )
        .route("/calls/{id}", put(update_call_status_http::handle))
        .route("/solicitudes", get(list_solicitudes_http::handle))
        .route(
            "/current_user",
            get(get_current_user_http::handle).post(set_current_user_http::handle),
        )
        .with_state(state)
}

/// Only `allowed_origin` may call the API; any method and header it asks for is allowed.
pub fn cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([allowed_origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// REST and GraphQL routes behind CORS and request tracing.
pub fn app(state: AppState, allowed_origin: HeaderValue) -> Router {
    let schema = graphql::build_schema(state.clone());
    router(state)
        .merge(graphql::router(schema))
        .layer(cors_layer(allowed_origin))
        .layer(TraceLayer::new_for_http())
}
