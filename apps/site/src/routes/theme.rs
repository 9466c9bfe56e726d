//! Theme toggle routes.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use taproom_core::{Palette, ThemeMode};
use tracing::debug;

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub mode: ThemeMode,
    pub palette: Palette,
}

impl From<ThemeMode> for ThemeResponse {
    fn from(mode: ThemeMode) -> Self {
        ThemeResponse {
            mode,
            palette: mode.palette(),
        }
    }
}

pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let mode = state.session.with_session(|s| s.theme.current());
    Json(ThemeResponse::from(mode))
}

/// Flips dark and light. The palette is derived from the new mode.
pub async fn toggle_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let mode = state.session.with_session_mut(|s| s.theme.toggle());
    debug!(%mode, "Theme toggled");
    Json(ThemeResponse::from(mode))
}
