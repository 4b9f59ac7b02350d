//! GitHub contents API as a [`FileStore`].
//!
//! `GET  /repos/{owner}/{repo}/contents/{path}` → `{sha, content (base64)}`, 404 when absent.
//! `PUT  /repos/{owner}/{repo}/contents/{path}` with `{message, content, sha?}`.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::publish::store::{FileStore, Revision, StoreError, StoredFile};

const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct GitHubStore {
    client: Client,
    token: String,
    repo: String,
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    sha: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
}

#[derive(Debug, Serialize)]
struct PutContentsRequest<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct PutContentsResponse {
    content: PutContentBody,
    commit: Option<PutCommitBody>,
}

#[derive(Debug, Deserialize)]
struct PutContentBody {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct PutCommitBody {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct GitHubErrorBody {
    message: String,
}

impl GitHubStore {
    pub fn new(
        token: String,
        repo: String,
        api_url: impl Into<String>,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            token,
            repo,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn contents_url(&self, path: &str) -> String {
        format!("{}/repos/{}/contents/{}", self.api_url, self.repo, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.contents_url(path))
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
    }

    async fn put(
        &self,
        path: &str,
        content: &str,
        sha: Option<&str>,
        message: &str,
    ) -> Result<Revision, StoreError> {
        let body = PutContentsRequest {
            message,
            content: STANDARD.encode(content.as_bytes()),
            sha,
        };

        let response = self
            .request(reqwest::Method::PUT, path)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status, response).await);
        }

        let put: PutContentsResponse = response.json().await?;
        debug!("Wrote {} as blob {}", path, put.content.sha);

        Ok(Revision {
            version: put.content.sha,
            commit: put.commit.map(|c| c.sha),
        })
    }
}

async fn api_error(status: StatusCode, response: reqwest::Response) -> StoreError {
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<GitHubErrorBody>(&body)
        .map(|e| e.message)
        .unwrap_or(body);
    StoreError::Api {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl FileStore for GitHubStore {
    async fn read(&self, path: &str) -> Result<Option<StoredFile>, StoreError> {
        let response = self.request(reqwest::Method::GET, path).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(api_error(status, response).await);
        }

        let contents: ContentsResponse = response.json().await?;
        let content = match (contents.encoding.as_deref(), contents.content) {
            (Some("base64"), Some(encoded)) => {
                let compact: String = encoded.split_whitespace().collect();
                let bytes = STANDARD
                    .decode(compact)
                    .map_err(|e| StoreError::Malformed(format!("content of {path}: {e}")))?;
                String::from_utf8_lossy(&bytes).into_owned()
            }
            // Files above the API's inline limit come back without content.
            // Only the sha is needed to update them.
            (_, other) => other.unwrap_or_default(),
        };

        Ok(Some(StoredFile {
            content,
            version: contents.sha,
        }))
    }

    async fn create(
        &self,
        path: &str,
        content: &str,
        message: &str,
    ) -> Result<Revision, StoreError> {
        self.put(path, content, None, message).await
    }

    async fn update(
        &self,
        path: &str,
        content: &str,
        version: &str,
        message: &str,
    ) -> Result<Revision, StoreError> {
        self.put(path, content, Some(version), message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const PATH: &str = "users/hari-krishnan-123.html";

    fn store(server: &MockServer) -> GitHubStore {
        GitHubStore::new("gh-token".to_string(), "octo/sites".to_string(), server.base_url())
            .unwrap()
    }

    #[tokio::test]
    async fn test_read_absent_is_none() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(format!("/repos/octo/sites/contents/{PATH}"))
                    .header("authorization", "Bearer gh-token");
                then.status(404).json_body(json!({"message": "Not Found"}));
            })
            .await;

        let result = store(&server).read(PATH).await.unwrap();

        mock.assert_async().await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_read_existing_decodes_content() {
        let server = MockServer::start_async().await;
        // GitHub wraps base64 at 60 columns.
        let encoded = "PGh0bWw+\nPC9odG1sPg==\n";
        server
            .mock_async(|when, then| {
                when.method(GET).path(format!("/repos/octo/sites/contents/{PATH}"));
                then.status(200).json_body(json!({
                    "type": "file",
                    "encoding": "base64",
                    "sha": "abc123",
                    "content": encoded
                }));
            })
            .await;

        let file = store(&server).read(PATH).await.unwrap().unwrap();

        assert_eq!(file.version, "abc123");
        assert_eq!(file.content, "<html></html>");
    }

    #[tokio::test]
    async fn test_read_server_error_is_not_absence() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(503).body("unavailable");
            })
            .await;

        let err = store(&server).read(PATH).await.unwrap_err();
        assert!(matches!(err, StoreError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_create_puts_base64_without_sha() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path(format!("/repos/octo/sites/contents/{PATH}"))
                    .json_body(json!({
                        "message": "Create Hari Krishnan",
                        "content": STANDARD.encode("<html></html>")
                    }));
                then.status(201).json_body(json!({
                    "content": {"sha": "new-sha", "path": PATH},
                    "commit": {"sha": "commit-1"}
                }));
            })
            .await;

        let revision = store(&server)
            .create(PATH, "<html></html>", "Create Hari Krishnan")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(revision.version, "new-sha");
        assert_eq!(revision.commit.as_deref(), Some("commit-1"));
    }

    #[tokio::test]
    async fn test_update_sends_prior_sha() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path(format!("/repos/octo/sites/contents/{PATH}"))
                    .json_body(json!({
                        "message": "Update Hari Krishnan",
                        "content": STANDARD.encode("<html>v2</html>"),
                        "sha": "old-sha"
                    }));
                then.status(200).json_body(json!({
                    "content": {"sha": "newer-sha"},
                    "commit": {"sha": "commit-2"}
                }));
            })
            .await;

        let revision = store(&server)
            .update(PATH, "<html>v2</html>", "old-sha", "Update Hari Krishnan")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(revision.version, "newer-sha");
    }

    #[tokio::test]
    async fn test_write_conflict_surfaces_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PUT);
                then.status(409)
                    .json_body(json!({"message": "sha does not match"}));
            })
            .await;

        let err = store(&server)
            .update(PATH, "<html/>", "stale", "Update X")
            .await
            .unwrap_err();

        match err {
            StoreError::Api { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "sha does not match");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
