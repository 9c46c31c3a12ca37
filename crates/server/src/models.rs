use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted quote. Wire field names are PascalCase (`Id`, `Book`, ...),
/// matching the published API shape.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Quote {
    pub id: Uuid,
    pub book: String,
    pub quote: String,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quote {
    /// Builds a fresh quote: new v4 id, both timestamps set to the same
    /// `Utc::now()` capture. `id` and `inserted_at` never change afterwards.
    pub fn new(book: String, quote: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            book,
            quote,
            inserted_at: now,
            updated_at: now,
        }
    }
}

/// Create/update payload. The id for updates comes from the request path,
/// never from the body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QuoteCreate {
    pub book: String,
    pub quote: String,
}
