use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use attendance::shared::core::clock::SystemClock;
use attendance::shell::config::AppConfig;
use attendance::shell::http::router;
use attendance::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    fmt().with_env_filter(filter).init();

    // In-memory deps for now
    let addr = config.bind_addr().await?;
    let graphiql = config.graphiql;
    let state = AppState::in_memory(config, Arc::new(SystemClock));
    let app = router(state);

    tracing::info!("HTTP API: http://{}/", addr);
    if graphiql {
        tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    }
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
