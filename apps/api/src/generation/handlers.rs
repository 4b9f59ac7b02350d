//! Axum route handlers for the Generation API.

use axum::Json;
use serde::Serialize;

use crate::generation::themes::{StyleTheme, THEMES};

#[derive(Debug, Serialize)]
pub struct ThemeListResponse {
    pub themes: &'static [StyleTheme],
}

/// GET /api/v1/themes
pub async fn handle_list_themes() -> Json<ThemeListResponse> {
    Json(ThemeListResponse { themes: THEMES })
}
