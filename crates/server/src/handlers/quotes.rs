use axum::extract::{Path as AxumPath, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::errors::{map_db_error, ServerError};
use crate::models::{Quote, QuoteCreate};

pub async fn create_quote(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<Quote>), ServerError> {
    let payload = decode_payload(&body)?;

    let quote = Quote::new(payload.book, payload.quote);
    state
        .store
        .insert(&quote)
        .await
        .map_err(|e| map_db_error(e, "quote insert failed"))?;

    tracing::debug!(id = %quote.id, "quote created");
    Ok((StatusCode::CREATED, Json(quote)))
}

pub async fn list_quotes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Quote>>, ServerError> {
    let quotes = state
        .store
        .list_all()
        .await
        .map_err(|e| map_db_error(e, "quote list failed"))?;

    Ok(Json(quotes))
}

pub async fn update_quote(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    body: String,
) -> Result<StatusCode, ServerError> {
    let id = parse_quote_id(&id)?;
    let payload = decode_payload(&body)?;

    let now = Utc::now();
    let rows = state
        .store
        .update_by_id(id, &payload.book, &payload.quote, now)
        .await
        .map_err(|e| map_db_error(e, "quote update failed"))?;

    if rows == 0 {
        return Ok(StatusCode::NOT_FOUND);
    }

    tracing::debug!(id = %id, "quote updated");
    Ok(StatusCode::OK)
}

pub async fn delete_quote(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<StatusCode, ServerError> {
    let id = parse_quote_id(&id)?;

    let rows = state
        .store
        .delete_by_id(id)
        .await
        .map_err(|e| map_db_error(e, "quote delete failed"))?;

    if rows == 0 {
        return Ok(StatusCode::NOT_FOUND);
    }

    tracing::debug!(id = %id, "quote deleted");
    Ok(StatusCode::OK)
}

// Bodies are decoded by hand so a malformed payload is a 400 with the parse
// error in the body, not the framework's default rejection.
fn decode_payload(body: &str) -> Result<QuoteCreate, ServerError> {
    serde_json::from_str::<QuoteCreate>(body).map_err(|e| ServerError::bad_request(e.to_string()))
}

fn parse_quote_id(raw: &str) -> Result<Uuid, ServerError> {
    Uuid::parse_str(raw).map_err(|e| ServerError::bad_request(format!("invalid quote id: {e}")))
}
