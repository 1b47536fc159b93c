//! HTTP client for the GitHub contents API and raw file downloads.

use crate::error::{AppError, Result};
use crate::models::{EntryType, FileEntry};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

pub struct GitHubClient {
    http: reqwest::Client,
    api_base: String,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    /// Create a client against a custom API base URL (used by tests).
    pub fn with_base_url(api_base: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("repo-grader/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            api_base: api_base.into(),
        })
    }

    /// List one directory via the contents API.
    ///
    /// Errors cover transport failures and non-success statuses alike; the
    /// tree walker decides what to do with a failed listing (drop the subtree).
    pub async fn list_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Vec<FileEntry>> {
        let url = format!("{}/repos/{owner}/{repo}/contents/{path}", self.api_base);

        let response = self
            .http
            .get(&url)
            .header("Accept", ACCEPT_HEADER)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("contents request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Internal(format!(
                "contents API returned {status} for '{path}'"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("failed to parse contents listing: {e}")))
    }

    /// Download the raw text content for a file entry.
    ///
    /// Returns `None` if the entry is not a file, carries no download URL, or
    /// the request fails at any stage. The file is then simply skipped.
    pub async fn fetch_raw(&self, entry: &FileEntry) -> Option<String> {
        if entry.entry_type != EntryType::File {
            return None;
        }
        let url = entry.download_url.as_deref()?;

        let response = self.http.get(url).send().await.ok()?;
        response.text().await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn lists_directory_contents() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octocat/demo/contents/"))
            .and(header("Accept", ACCEPT_HEADER))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"path": "main.py", "type": "file", "download_url": "http://x/main.py"},
                {"path": "docs", "type": "dir", "download_url": null}
            ])))
            .mount(&server)
            .await;

        let client = GitHubClient::with_base_url(server.uri()).unwrap();
        let entries = client.list_contents("octocat", "demo", "").await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entry_type, EntryType::File);
        assert_eq!(entries[1].entry_type, EntryType::Dir);
    }

    #[tokio::test]
    async fn non_success_listing_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = GitHubClient::with_base_url(server.uri()).unwrap();
        let result = client.list_contents("octocat", "demo", "missing").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn fetch_raw_skips_non_files() {
        let client = GitHubClient::with_base_url("http://unused").unwrap();
        let dir = FileEntry {
            path: "src".into(),
            entry_type: EntryType::Dir,
            download_url: Some("http://unused/src".into()),
        };
        assert!(client.fetch_raw(&dir).await.is_none());
    }

    #[tokio::test]
    async fn fetch_raw_skips_missing_download_url() {
        let client = GitHubClient::with_base_url("http://unused").unwrap();
        let entry = FileEntry {
            path: "a.py".into(),
            entry_type: EntryType::File,
            download_url: None,
        };
        assert!(client.fetch_raw(&entry).await.is_none());
    }

    #[tokio::test]
    async fn fetch_raw_returns_body_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/raw/a.py"))
            .respond_with(ResponseTemplate::new(200).set_body_string("print('hello world')"))
            .mount(&server)
            .await;

        let client = GitHubClient::with_base_url(server.uri()).unwrap();
        let entry = FileEntry {
            path: "a.py".into(),
            entry_type: EntryType::File,
            download_url: Some(format!("{}/raw/a.py", server.uri())),
        };
        assert_eq!(
            client.fetch_raw(&entry).await.as_deref(),
            Some("print('hello world')")
        );
    }
}
