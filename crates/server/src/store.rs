//! Persistence gateway: single-statement parameterized SQL over the quotes
//! table, one variant per dialect. Request values are only ever bound, never
//! spliced into statement text.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, SqlitePool};
use uuid::Uuid;

use crate::models::Quote;

#[derive(Clone)]
pub enum QuoteStore {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl QuoteStore {
    /// Inserts a single row carrying all five fields. Constraint violations
    /// and connectivity failures surface immediately; no retry.
    pub async fn insert(&self, quote: &Quote) -> Result<(), sqlx::Error> {
        match self {
            QuoteStore::Postgres(pool) => {
                sqlx::query(
                    "INSERT INTO quotes (id, book, quote, inserted_at, updated_at) \
                     VALUES ($1, $2, $3, $4, $5)",
                )
                .bind(quote.id)
                .bind(&quote.book)
                .bind(&quote.quote)
                .bind(quote.inserted_at)
                .bind(quote.updated_at)
                .execute(pool)
                .await?;
            }
            QuoteStore::Sqlite(pool) => {
                sqlx::query(
                    "INSERT INTO quotes (id, book, quote, inserted_at, updated_at) \
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )
                .bind(quote.id)
                .bind(&quote.book)
                .bind(&quote.quote)
                .bind(quote.inserted_at)
                .bind(quote.updated_at)
                .execute(pool)
                .await?;
            }
        }
        Ok(())
    }

    /// Fetches every row. No ORDER BY; callers must not rely on ordering.
    pub async fn list_all(&self) -> Result<Vec<Quote>, sqlx::Error> {
        let rows = match self {
            QuoteStore::Postgres(pool) => {
                sqlx::query_as::<_, Quote>(
                    "SELECT id, book, quote, inserted_at, updated_at FROM quotes",
                )
                .fetch_all(pool)
                .await?
            }
            QuoteStore::Sqlite(pool) => {
                sqlx::query_as::<_, Quote>(
                    "SELECT id, book, quote, inserted_at, updated_at FROM quotes",
                )
                .fetch_all(pool)
                .await?
            }
        };
        Ok(rows)
    }

    /// Updates `book`, `quote` and `updated_at` for the given id. Returns the
    /// affected-row count (0 or 1, the id is the primary key).
    pub async fn update_by_id(
        &self,
        id: Uuid,
        book: &str,
        quote: &str,
        now: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error> {
        let rows = match self {
            QuoteStore::Postgres(pool) => {
                sqlx::query(
                    "UPDATE quotes SET book = $1, quote = $2, updated_at = $3 WHERE id = $4",
                )
                .bind(book)
                .bind(quote)
                .bind(now)
                .bind(id)
                .execute(pool)
                .await?
                .rows_affected()
            }
            QuoteStore::Sqlite(pool) => {
                sqlx::query(
                    "UPDATE quotes SET book = ?1, quote = ?2, updated_at = ?3 WHERE id = ?4",
                )
                .bind(book)
                .bind(quote)
                .bind(now)
                .bind(id)
                .execute(pool)
                .await?
                .rows_affected()
            }
        };
        Ok(rows)
    }

    /// Deletes the row with the given id, returning the affected-row count.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let rows = match self {
            QuoteStore::Postgres(pool) => sqlx::query("DELETE FROM quotes WHERE id = $1")
                .bind(id)
                .execute(pool)
                .await?
                .rows_affected(),
            QuoteStore::Sqlite(pool) => sqlx::query("DELETE FROM quotes WHERE id = ?1")
                .bind(id)
                .execute(pool)
                .await?
                .rows_affected(),
        };
        Ok(rows)
    }
}
