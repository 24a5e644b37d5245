use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use makebetter_core::lead::{Lead, LeadSubmission};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::middleware::auth::Operator;
use crate::repository;
use crate::state::AppState;

/// Lead capture and listing.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/contact", post(submit_lead))
        .route("/api/leads", get(list_leads))
}

async fn submit_lead(
    State(state): State<AppState>,
    Json(lead): Json<LeadSubmission>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    lead.validate()?;
    let stored = repository::insert_lead(state.pool(), &lead).await?;
    tracing::info!(lead_id = %stored.id, "lead captured");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Lead captured", "id": stored.id })),
    ))
}

async fn list_leads(State(state): State<AppState>, _operator: Operator) -> ApiResult<Json<Vec<Lead>>> {
    Ok(Json(repository::list_leads(state.pool()).await?))
}
