use sqlx::{Pool, Sqlite};

use crate::app_state::AppState;
use crate::config::ConfigError;
use crate::store::QuoteStore;

const POSTGRES_SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS quotes (
    id UUID PRIMARY KEY,
    book TEXT NOT NULL,
    quote TEXT NOT NULL,
    inserted_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);";

const SQLITE_SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS quotes (
    id BLOB PRIMARY KEY,
    book TEXT NOT NULL,
    quote TEXT NOT NULL,
    inserted_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);";

/// Applies the quotes table DDL. Idempotent; runs once at startup.
pub async fn apply_schema(state: &AppState) -> Result<(), ConfigError> {
    match &state.store {
        QuoteStore::Postgres(pool) => {
            for stmt in split_statements(POSTGRES_SCHEMA) {
                sqlx::query(stmt)
                    .execute(pool)
                    .await
                    .map_err(|e| ConfigError::Invalid(format!("schema apply error: {e}")))?;
            }
        }
        QuoteStore::Sqlite(pool) => {
            execute_schema_sqlite(pool, SQLITE_SCHEMA).await?;
        }
    }
    Ok(())
}

async fn execute_schema_sqlite(pool: &Pool<Sqlite>, content: &str) -> Result<(), ConfigError> {
    for stmt in split_statements(content) {
        sqlx::query(stmt)
            .execute(pool)
            .await
            .map_err(|e| ConfigError::Invalid(format!("schema apply error: {e}")))?;
    }
    Ok(())
}

fn split_statements(content: &str) -> impl Iterator<Item = &str> {
    content
        .split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
}
