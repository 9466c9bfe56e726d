//! Food menu listing with category tabs.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use taproom_core::catalog::ALL_CATEGORIES;
use taproom_core::{Catalog, CatalogItem, MenuFilter};

use crate::state::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuQuery {
    /// Tab label; missing or `"All"` lists everything.
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub categories: Vec<&'static str>,
    pub selected: String,
    pub items: Vec<CatalogItem>,
}

pub async fn list_menu(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Json<MenuResponse> {
    let filter = MenuFilter::from_label(query.category.as_deref().unwrap_or_default());
    let selected = match &filter {
        MenuFilter::All => ALL_CATEGORIES.to_string(),
        MenuFilter::Category(category) => category.clone(),
    };

    let items = state.session.with_session(|s| {
        s.cart
            .catalog()
            .filter(&filter)
            .into_iter()
            .cloned()
            .collect()
    });

    Json(MenuResponse {
        categories: Catalog::categories(),
        selected,
        items,
    })
}
