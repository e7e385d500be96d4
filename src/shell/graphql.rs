use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};

use crate::modules::calls::adapters::inbound::graphql::{CallsMutation, CallsQuery};
use crate::modules::current_user::adapters::inbound::graphql::{
    CurrentUserMutation, CurrentUserQuery,
};
use crate::modules::messages::adapters::inbound::graphql::{MessagesMutation, MessagesQuery};
use crate::modules::solicitudes::adapters::inbound::graphql::SolicitudesQuery;
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(MessagesQuery, CallsQuery, SolicitudesQuery, CurrentUserQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(MessagesMutation, CallsMutation, CurrentUserMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub fn router(schema: AppSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
