// Builder sessions: one profile per session, held in memory for the life of the process.

pub mod handlers;
pub mod workflow;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::publish::slug::{derive_slug, slug_matches};

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub profile: Profile,
    /// Slug reserved by the first publish attempt; reused while the name still maps to it.
    pub slug: Option<String>,
}

impl Session {
    /// Slug the next publish writes to, reserved before any network call so
    /// overlapping publishes from one session target the same page.
    ///
    /// A name change since the last reservation derives a fresh slug. `None`
    /// while the name is blank.
    pub fn reserve_slug(&mut self) -> Option<String> {
        let name = self.profile.basics.name.trim();
        if name.is_empty() {
            return None;
        }

        match &self.slug {
            Some(slug) if slug_matches(slug, name) => Some(slug.clone()),
            _ => {
                let slug = derive_slug(name, &mut rand::thread_rng());
                self.slug = Some(slug.clone());
                Some(slug)
            }
        }
    }
}

/// Registry of live sessions. Each session's profile is only ever touched
/// through its own entry, and the lock is never held across a network call.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, Session::default());
        debug!("Session {id} started");
        id
    }

    /// Copy of the session's current state.
    pub async fn snapshot(&self, id: Uuid) -> Result<Session, AppError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Applies `f` to the session and returns its result.
    pub async fn update<T, F>(&self, id: Uuid, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Session) -> T,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        Ok(f(session))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| debug!("Session {id} ended"))
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
