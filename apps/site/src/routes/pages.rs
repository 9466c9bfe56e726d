//! Page resolution: `/food-menu` shows the menu, every other path shows
//! the home page.

use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};
use taproom_core::Page;
use tracing::debug;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolveQuery {
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub page: Page,
    /// Canonical path of the resolved page.
    pub path: &'static str,
}

pub async fn resolve(Query(query): Query<ResolveQuery>) -> Json<PageResponse> {
    let page = Page::resolve(&query.path);
    debug!(requested = %query.path, ?page, "Resolved page");
    Json(PageResponse {
        page,
        path: page.path(),
    })
}
