//! Review generation and aggregation.
//!
//! - `gemini`: generateContent client producing per-file review text
//! - `score`: "X/10" score extraction from free-form review text
//! - `pipeline`: the evaluator orchestrating tree walk, reviews and the report

pub mod gemini;
pub mod pipeline;
pub mod score;

pub use gemini::{GeminiClient, ReviewOutcome};
pub use pipeline::{Evaluator, SharedEvaluator};
