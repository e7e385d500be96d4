use contact_requests::shell::config::Config;
use contact_requests::shell::graphql::GRAPHQL_PATH;
use contact_requests::shell::http::app;
use contact_requests::shell::state::AppState;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // In-memory deps only
    let state = AppState::in_memory();
    let app = app(state, config.allowed_origin.clone());

    let addr = config.addr();
    tracing::info!(
        %addr,
        allowed_origin = ?config.allowed_origin,
        "REST endpoints: http://{}/, GraphQL endpoint: http://{}{}",
        addr,
        addr,
        GRAPHQL_PATH
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
