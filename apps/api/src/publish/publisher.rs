//! Publishing — puts generated markup at a stable path and reports the public link.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::publish::slug::{derive_slug, page_path};
use crate::publish::store::{upsert, FileStore, Revision, UpsertKind};

/// Outcome of a successful publish.
#[derive(Debug, Clone, Serialize)]
pub struct PublishResult {
    #[serde(skip)]
    pub content: String,
    pub slug: String,
    pub path: String,
    pub url: String,
    pub kind: UpsertKind,
    pub revision: Revision,
    pub published_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct Publisher {
    store: Arc<dyn FileStore>,
    hosting_domain: String,
}

impl Publisher {
    pub fn new(store: Arc<dyn FileStore>, hosting_domain: impl Into<String>) -> Self {
        Self {
            store,
            hosting_domain: hosting_domain.into().trim_end_matches('/').to_string(),
        }
    }

    /// Public URL of a stored path.
    pub fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.hosting_domain, path)
    }

    /// Publishes under a freshly derived slug.
    pub async fn publish(&self, name: &str, content: String) -> Result<PublishResult, AppError> {
        let slug = derive_slug(name, &mut rand::thread_rng());
        self.publish_at(name, &slug, content).await
    }

    /// Publishes under `slug`, creating or replacing the page there.
    ///
    /// Store failures are terminal: nothing is retried and the content is dropped.
    pub async fn publish_at(
        &self,
        name: &str,
        slug: &str,
        content: String,
    ) -> Result<PublishResult, AppError> {
        let path = page_path(slug);

        let (kind, revision) = upsert(self.store.as_ref(), &path, &content, name)
            .await
            .map_err(|e| AppError::Publish(format!("{path}: {e}")))?;

        let url = self.public_url(&path);
        info!("Published {} ({:?}) at {}", path, kind, url);

        Ok(PublishResult {
            content,
            slug: slug.to_string(),
            path,
            url,
            kind,
            revision,
            published_at: Utc::now(),
        })
    }
}
