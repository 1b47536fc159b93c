//! Gemini generateContent client.
//!
//! One single-turn generation request per file. Failures never propagate as
//! errors: the pipeline treats a failed review as reportable text, so the
//! outcome is a tagged enum rather than a bare string.

use serde_json::json;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const MODEL: &str = "gemini-2.0-flash";

/// Outcome of one review request.
///
/// `Failed` carries the reason instead of masquerading as review text, so
/// callers can keep failures out of score aggregation. Rendering into the
/// report payload is a separate, explicit step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    Completed(String),
    Failed(String),
}

impl ReviewOutcome {
    /// The text as it appears in the report payload.
    pub fn into_report_text(self) -> String {
        match self {
            ReviewOutcome::Completed(text) => text,
            ReviewOutcome::Failed(reason) => format!("Review failed: {reason}"),
        }
    }
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a client against a custom base URL (used by tests).
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Ask the model to review one file, returning the trimmed response text.
    pub async fn review_file(&self, filename: &str, content: &str) -> ReviewOutcome {
        let url = format!(
            "{}/v1beta/models/{MODEL}:generateContent?key={}",
            self.base_url, self.api_key
        );
        let body = json!({
            "contents": [
                { "parts": [ { "text": build_prompt(filename, content) } ] }
            ]
        });

        let response = match self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return ReviewOutcome::Failed(e.to_string()),
        };

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return ReviewOutcome::Failed(format!("{} - {}", status.as_u16(), body_text));
        }

        let response_body: serde_json::Value = match response.json().await {
            Ok(v) => v,
            Err(e) => return ReviewOutcome::Failed(format!("failed to parse response: {e}")),
        };

        let text = response_body
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(|t| t.as_str());

        match text {
            Some(text) => ReviewOutcome::Completed(text.trim().to_string()),
            None => {
                ReviewOutcome::Failed(format!("unexpected response structure: {response_body}"))
            }
        }
    }
}

/// Review prompt for one file. The extension doubles as a fenced-code syntax
/// hint; the closing instruction anchors the score the extractor looks for.
fn build_prompt(filename: &str, content: &str) -> String {
    let syntax = filename.rsplit('.').next().unwrap_or("");
    format!(
        "\nYou are a senior software reviewer.\n\n\
         Review the following file: `{filename}`\n\n\
         Code:\n```{syntax}\n{content}\n```\n\n\
         Return a detailed review with:\n\
         1. Code quality (indentation, naming, logic)\n\
         2. Suggestions for improvement\n\
         3. Any potential bugs or issues\n\
         4. Overall file score out of 10\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn generation_response(text: &str) -> serde_json::Value {
        json!({
            "candidates": [
                { "content": { "parts": [ { "text": text } ] } }
            ]
        })
    }

    #[test]
    fn prompt_embeds_filename_syntax_and_content() {
        let prompt = build_prompt("src/app.py", "import os\n");
        assert!(prompt.contains("`src/app.py`"));
        assert!(prompt.contains("```py\n"));
        assert!(prompt.contains("import os\n"));
        assert!(prompt.contains("Overall file score out of 10"));
    }

    #[test]
    fn failed_outcome_renders_sentinel_text() {
        let outcome = ReviewOutcome::Failed("429 - quota exceeded".into());
        assert_eq!(
            outcome.into_report_text(),
            "Review failed: 429 - quota exceeded"
        );
    }

    #[tokio::test]
    async fn returns_trimmed_response_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/v1beta/models/{MODEL}:generateContent")))
            .and(query_param("key", "test-key"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(generation_response("  Solid file. Score: 8/10\n")),
            )
            .mount(&server)
            .await;

        let client = GeminiClient::with_base_url(server.uri(), "test-key");
        let outcome = client.review_file("a.py", "print('ok')").await;
        assert_eq!(
            outcome,
            ReviewOutcome::Completed("Solid file. Score: 8/10".into())
        );
    }

    #[tokio::test]
    async fn non_success_status_becomes_failed_outcome() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = GeminiClient::with_base_url(server.uri(), "test-key");
        let outcome = client.review_file("a.py", "print('ok')").await;
        assert_eq!(outcome, ReviewOutcome::Failed("500 - boom".into()));
    }

    #[tokio::test]
    async fn malformed_response_becomes_failed_outcome() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let client = GeminiClient::with_base_url(server.uri(), "test-key");
        let outcome = client.review_file("a.py", "print('ok')").await;
        assert!(matches!(outcome, ReviewOutcome::Failed(_)));
    }
}
