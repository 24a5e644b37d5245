use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::middleware::auth::Operator;
use crate::repository;
use crate::state::AppState;

/// Site content routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/content", get(get_content).put(replace_content))
}

/// The stored document as saved, whatever its shape. Before the first save
/// this is `{}`. Defaulting is the reader's job.
async fn get_content(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let content = repository::fetch_content(state.pool()).await?;
    Ok(Json(content.unwrap_or_else(|| json!({}))))
}

/// Full replace with the request body, stored verbatim.
async fn replace_content(
    State(state): State<AppState>,
    operator: Operator,
    Json(content): Json<Value>,
) -> ApiResult<Json<Value>> {
    repository::replace_content(state.pool(), &content).await?;
    tracing::info!(
        operator = ?operator.subject,
        email = ?operator.email,
        "site content replaced"
    );
    Ok(Json(json!({ "message": "Updated successfully" })))
}
