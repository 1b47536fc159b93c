//! API route handlers - maps HTTP endpoints to the evaluation pipeline.
//!
//! - `evaluate`: POST /evaluate, the single orchestration endpoint
//! - the root route returns a plain welcome string

pub mod evaluate;

use axum::{routing::get, Router};

use crate::review::SharedEvaluator;

pub fn create_router(evaluator: SharedEvaluator) -> Router {
    Router::new()
        .route("/", get(home))
        .merge(evaluate::routes(evaluator))
}

async fn home() -> &'static str {
    "Welcome to the GitHub Project Evaluator API!"
}
