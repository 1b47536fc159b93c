//! Review and report DTOs for the /evaluate response.

use serde::{Deserialize, Serialize};

/// One reviewed file and the review text produced for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReview {
    pub file: String,
    pub review: String,
}

/// Aggregate result for one repository evaluation.
///
/// `score` is the average of all extracted per-file scores rounded to two
/// decimals, or 0 when no score could be extracted. `comments` holds at most
/// the first three review texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub repo_url: String,
    pub total_files_reviewed: usize,
    pub score: f64,
    pub comments: Vec<String>,
    pub file_reviews: Vec<FileReview>,
}
