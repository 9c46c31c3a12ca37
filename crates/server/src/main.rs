use std::net::SocketAddr;

use quotes_server::config::{ConfigError, ServerConfig};
use quotes_server::{db, handlers, logging, schema};

#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    logging::init_tracing(&config)?;

    tracing::info!(dialect = ?config.dialect()?, "database dialect configured");
    tracing::info!(host = %config.http.host, port = config.http.port, "server http bind");

    let state = db::connect_db(&config).await?;
    schema::apply_schema(&state).await?;

    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .map_err(|e| ConfigError::Invalid(format!("invalid http bind: {e}")))?;

    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| ConfigError::Invalid(format!("http server error: {e}")))?;

    Ok(())
}
