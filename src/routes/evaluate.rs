//! Repository evaluation endpoint.
//!
//! POST /evaluate with body `{"github_link": "https://github.com/owner/repo"}`.
//!
//! Returns the aggregate report (200) or `{"error": "Invalid GitHub link"}`
//! (400). Upstream failures never produce an error status; they degrade the
//! report instead.

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use crate::error::Result;
use crate::models::EvaluationReport;
use crate::review::SharedEvaluator;

pub fn routes(evaluator: SharedEvaluator) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate))
        .with_state(evaluator)
}

#[derive(Debug, Deserialize)]
struct EvaluateRequest {
    #[serde(default)]
    github_link: Option<String>,
}

async fn evaluate(
    State(evaluator): State<SharedEvaluator>,
    Json(body): Json<EvaluateRequest>,
) -> Result<Json<EvaluationReport>> {
    let link = body.github_link.as_deref().unwrap_or_default();
    let report = evaluator.evaluate(link).await?;
    Ok(Json(report))
}
