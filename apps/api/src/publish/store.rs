//! Remote file store seam and the create-or-update (upsert) operation on top of it.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed store response: {0}")]
    Malformed(String),
}

/// A file as currently held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub content: String,
    /// Opaque token that must accompany an update of this file.
    pub version: String,
}

/// Identifies the revision a write produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Revision {
    /// Version token of the written file.
    pub version: String,
    /// Commit that recorded the write, when the store reports one.
    pub commit: Option<String>,
}

/// Whether an upsert created a new file or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertKind {
    Created,
    Updated,
}

/// A key-value file store keyed by path.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// `Ok(None)` means the path does not exist. Any other failure is an `Err`.
    async fn read(&self, path: &str) -> Result<Option<StoredFile>, StoreError>;

    async fn create(&self, path: &str, content: &str, message: &str)
        -> Result<Revision, StoreError>;

    async fn update(
        &self,
        path: &str,
        content: &str,
        version: &str,
        message: &str,
    ) -> Result<Revision, StoreError>;
}

/// Creates `path` if it is absent, otherwise updates it against its current version.
///
/// A failed read propagates; only a definite "not found" leads to a create.
/// Writes are not retried.
pub async fn upsert(
    store: &dyn FileStore,
    path: &str,
    content: &str,
    display_name: &str,
) -> Result<(UpsertKind, Revision), StoreError> {
    match store.read(path).await? {
        Some(existing) => {
            info!(
                "Updating existing page at {path} ({} -> {} bytes)",
                existing.content.len(),
                content.len()
            );
            let revision = store
                .update(path, content, &existing.version, &format!("Update {display_name}"))
                .await?;
            Ok((UpsertKind::Updated, revision))
        }
        None => {
            info!("Creating new page at {path}");
            let revision = store
                .create(path, content, &format!("Create {display_name}"))
                .await?;
            Ok((UpsertKind::Created, revision))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Operations observed by [`MemoryStore`], in call order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum StoreCall {
        Read(String),
        Create { path: String, message: String },
        Update { path: String, version: String, message: String },
    }

    /// In-memory store with switchable failures.
    #[derive(Default)]
    pub(crate) struct MemoryStore {
        pub(crate) files: Mutex<HashMap<String, StoredFile>>,
        pub(crate) calls: Mutex<Vec<StoreCall>>,
        pub(crate) fail_reads: bool,
        pub(crate) fail_writes: bool,
        pub(crate) counter: Mutex<u32>,
    }

    impl MemoryStore {
        pub(crate) fn with_file(path: &str, content: &str, version: &str) -> Self {
            let store = Self::default();
            store.files.lock().unwrap().insert(
                path.to_string(),
                StoredFile {
                    content: content.to_string(),
                    version: version.to_string(),
                },
            );
            store
        }

        pub(crate) fn calls(&self) -> Vec<StoreCall> {
            self.calls.lock().unwrap().clone()
        }

        fn next_version(&self) -> String {
            let mut counter = self.counter.lock().unwrap();
            *counter += 1;
            format!("v{}", *counter)
        }

        fn write_failure() -> StoreError {
            StoreError::Api {
                status: 422,
                message: "write rejected".to_string(),
            }
        }
    }

    #[async_trait]
    impl FileStore for MemoryStore {
        async fn read(&self, path: &str) -> Result<Option<StoredFile>, StoreError> {
            self.calls
                .lock()
                .unwrap()
                .push(StoreCall::Read(path.to_string()));
            if self.fail_reads {
                return Err(StoreError::Api {
                    status: 502,
                    message: "bad gateway".to_string(),
                });
            }
            Ok(self.files.lock().unwrap().get(path).cloned())
        }

        async fn create(
            &self,
            path: &str,
            content: &str,
            message: &str,
        ) -> Result<Revision, StoreError> {
            self.calls.lock().unwrap().push(StoreCall::Create {
                path: path.to_string(),
                message: message.to_string(),
            });
            if self.fail_writes {
                return Err(Self::write_failure());
            }
            let version = self.next_version();
            self.files.lock().unwrap().insert(
                path.to_string(),
                StoredFile {
                    content: content.to_string(),
                    version: version.clone(),
                },
            );
            Ok(Revision {
                version,
                commit: None,
            })
        }

        async fn update(
            &self,
            path: &str,
            content: &str,
            version: &str,
            message: &str,
        ) -> Result<Revision, StoreError> {
            self.calls.lock().unwrap().push(StoreCall::Update {
                path: path.to_string(),
                version: version.to_string(),
                message: message.to_string(),
            });
            if self.fail_writes {
                return Err(Self::write_failure());
            }
            let new_version = self.next_version();
            self.files.lock().unwrap().insert(
                path.to_string(),
                StoredFile {
                    content: content.to_string(),
                    version: new_version.clone(),
                },
            );
            Ok(Revision {
                version: new_version,
                commit: None,
            })
        }
    }

    #[tokio::test]
    async fn test_upsert_creates_when_absent() {
        let store = MemoryStore::default();

        let (kind, revision) = upsert(&store, "users/a-123.html", "<html/>", "A")
            .await
            .unwrap();

        assert_eq!(kind, UpsertKind::Created);
        assert_eq!(revision.version, "v1");
        assert_eq!(
            store.calls(),
            vec![
                StoreCall::Read("users/a-123.html".to_string()),
                StoreCall::Create {
                    path: "users/a-123.html".to_string(),
                    message: "Create A".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_upsert_updates_with_prior_version() {
        let store = MemoryStore::with_file("users/a-123.html", "<old/>", "sha-old");

        let (kind, _) = upsert(&store, "users/a-123.html", "<new/>", "A")
            .await
            .unwrap();

        assert_eq!(kind, UpsertKind::Updated);
        assert_eq!(
            store.calls()[1],
            StoreCall::Update {
                path: "users/a-123.html".to_string(),
                version: "sha-old".to_string(),
                message: "Update A".to_string(),
            }
        );
        assert_eq!(
            store.files.lock().unwrap()["users/a-123.html"].content,
            "<new/>"
        );
    }

    #[tokio::test]
    async fn test_failed_read_does_not_fall_through_to_create() {
        let store = MemoryStore {
            fail_reads: true,
            ..Default::default()
        };

        let err = upsert(&store, "users/a-123.html", "<html/>", "A")
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Api { status: 502, .. }));
        assert_eq!(store.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_create_is_not_retried() {
        let store = MemoryStore {
            fail_writes: true,
            ..Default::default()
        };

        let err = upsert(&store, "users/a-123.html", "<html/>", "A")
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Api { status: 422, .. }));
        let creates = store
            .calls()
            .into_iter()
            .filter(|c| matches!(c, StoreCall::Create { .. }))
            .count();
        assert_eq!(creates, 1);
    }
}
