//! Hero slideshow routes.
//!
//! Automatic advances come from the `SlideshowTimer`; `tick` is the same
//! step on demand and `set_index` is dot navigation.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use taproom_core::SlideView;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct SetIndexRequest {
    pub index: usize,
}

pub async fn get_slide(State(state): State<AppState>) -> Json<SlideView> {
    Json(state.session.with_session(|s| s.slideshow.view()))
}

pub async fn tick(State(state): State<AppState>) -> Json<SlideView> {
    let view = state.session.with_session_mut(|s| {
        s.slideshow.tick();
        s.slideshow.view()
    });
    debug!(index = view.index, "Slideshow ticked");
    Json(view)
}

/// Jumps to a slide. Out-of-range indexes are rejected and the current
/// slide is kept.
pub async fn set_index(
    State(state): State<AppState>,
    Json(request): Json<SetIndexRequest>,
) -> Result<Json<SlideView>, ApiError> {
    let view = state.session.with_session_mut(|s| {
        s.slideshow.set_index(request.index)?;
        Ok::<_, ApiError>(s.slideshow.view())
    })?;
    debug!(index = view.index, "Slide selected");
    Ok(Json(view))
}
