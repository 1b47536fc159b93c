//! Repository evaluation pipeline.
//!
//! One `evaluate` call per request: parse the link, walk the tree, review each
//! eligible file in listing order, extract scores, and assemble the report.
//! All outbound calls are sequential; nothing is shared across requests.

use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::github::{self, GitHubClient};
use crate::models::{EvaluationReport, FileReview};
use crate::review::gemini::{GeminiClient, ReviewOutcome};
use crate::review::score::extract_score;

/// Extensions eligible for review.
const REVIEWABLE_EXTENSIONS: [&str; 8] = [
    ".py", ".js", ".jsx", ".ts", ".tsx", ".java", ".cpp", ".md",
];

/// Content shorter than this is too trivial to review.
const MIN_CONTENT_CHARS: usize = 20;

/// How many review texts surface in the report's `comments` summary.
const SUMMARY_COMMENTS: usize = 3;

pub struct Evaluator {
    github: GitHubClient,
    gemini: GeminiClient,
}

pub type SharedEvaluator = Arc<Evaluator>;

impl Evaluator {
    pub fn new(github: GitHubClient, gemini: GeminiClient) -> Self {
        Self { github, gemini }
    }

    /// Evaluate one repository end to end.
    ///
    /// Only an invalid link is an error. Upstream failures degrade the result
    /// instead: dropped subtrees, skipped files, or sentinel review text.
    pub async fn evaluate(&self, github_link: &str) -> Result<EvaluationReport> {
        let (owner, repo) = github::parse_repo_link(github_link).ok_or(AppError::InvalidLink)?;

        let entries = github::walk_tree(&self.github, &owner, &repo).await;

        let mut file_reviews: Vec<FileReview> = Vec::new();
        let mut score_total: u32 = 0;
        let mut score_count: u32 = 0;

        for entry in &entries {
            if !has_reviewable_extension(&entry.path) {
                continue;
            }
            let Some(content) = self.github.fetch_raw(entry).await else {
                continue;
            };
            if content.chars().count() < MIN_CONTENT_CHARS {
                continue;
            }

            let outcome = self.gemini.review_file(&entry.path, &content).await;
            // Failed reviews still appear in the report, but only completed
            // ones may contribute a score.
            if let ReviewOutcome::Completed(text) = &outcome {
                if let Some(score) = extract_score(text) {
                    score_total += score;
                    score_count += 1;
                }
            }
            file_reviews.push(FileReview {
                file: entry.path.clone(),
                review: outcome.into_report_text(),
            });
        }

        let score = if score_count == 0 {
            0.0
        } else {
            (f64::from(score_total) / f64::from(score_count) * 100.0).round() / 100.0
        };

        let comments = file_reviews
            .iter()
            .take(SUMMARY_COMMENTS)
            .map(|r| r.review.clone())
            .collect();

        Ok(EvaluationReport {
            repo_url: github_link.to_string(),
            total_files_reviewed: file_reviews.len(),
            score,
            comments,
            file_reviews,
        })
    }
}

/// Extension check against the allow-list. The "extension" is everything
/// after the last dot, so a dotless name like `LICENSE` never qualifies.
fn has_reviewable_extension(path: &str) -> bool {
    let ext = format!(".{}", path.rsplit('.').next().unwrap_or(""));
    REVIEWABLE_EXTENSIONS.contains(&ext.as_str())
}
