//! Repository URL parsing.

use once_cell::sync::Lazy;
use regex::Regex;

static REPO_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https://github\.com/([^/]+)/([^/]+)").unwrap());

/// Extract (owner, repo) from a GitHub repository URL.
///
/// Matches the prefix `https://github.com/<owner>/<repo>`; anything after the
/// repo segment is ignored. Returns `None` for anything else, which callers
/// must treat as invalid input.
pub fn parse_repo_link(url: &str) -> Option<(String, String)> {
    let caps = REPO_LINK.captures(url)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}
