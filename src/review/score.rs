//! Score extraction from free-form review text.

use once_cell::sync::Lazy;
use regex::Regex;

// "score" followed eventually by 1-2 digits and "/10" (slash and spacing
// optional). No range validation: a malformed review can report 55.
static SCORE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)score.*?(\d{1,2})\s*/?\s*10").unwrap());

/// First score mentioned in the review, or `None` if no pattern matches.
pub fn extract_score(review: &str) -> Option<u32> {
    let caps = SCORE_PATTERN.captures(review)?;
    caps[1].parse().ok()
}
