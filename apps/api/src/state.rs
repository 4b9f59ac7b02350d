use crate::sessions::workflow::SiteBuilder;
use crate::sessions::SessionRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup except the per-session entries
/// inside the registry.
#[derive(Clone)]
pub struct AppState {
    /// Compose → generate → publish pipeline, wired to the live clients.
    pub builder: SiteBuilder,
    pub sessions: SessionRegistry,
}
