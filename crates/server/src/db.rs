use sqlx::postgres::PgPoolOptions;
use sqlx::SqlitePool;

use crate::app_state::AppState;
use crate::config::{ConfigError, ServerConfig, SqlDialect};
use crate::store::QuoteStore;

/// Opens the connection pool named by `DATABASE_URL`. A failed initial
/// connection is fatal; the caller exits before serving any request.
pub async fn connect_db(config: &ServerConfig) -> Result<AppState, ConfigError> {
    let store = match config.dialect()? {
        SqlDialect::Sqlite => {
            let pool = SqlitePool::connect(&config.database_url)
                .await
                .map_err(|e| ConfigError::Invalid(format!("sqlite connect failed: {e}")))?;
            QuoteStore::Sqlite(pool)
        }
        SqlDialect::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect(&config.database_url)
                .await
                .map_err(|e| ConfigError::Invalid(format!("postgres connect failed: {e}")))?;
            QuoteStore::Postgres(pool)
        }
    };

    Ok(AppState { store })
}
