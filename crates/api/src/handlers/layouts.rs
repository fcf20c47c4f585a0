//! Handlers for the layout catalog read surface.
//!
//! List-shaped responses accept an optional `?sort=` parameter
//! (`name`, `complexity`, `category`, `updated`, `downloads`); anything
//! else leaves the catalog's storage order untouched.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use gallery_core::error::CoreError;
use gallery_core::layout::Layout;
use gallery_core::query::{sort_layouts, SortKey};
use gallery_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters shared by the list and search routes.
#[derive(Debug, Deserialize)]
pub struct LayoutListQuery {
    pub sort: Option<String>,
}

fn apply_sort(layouts: &mut [Layout], params: &LayoutListQuery) {
    if let Some(key) = params.sort.as_deref().and_then(SortKey::parse) {
        sort_layouts(layouts, key);
    }
}

/// GET /api/layouts
///
/// List all active layouts.
pub async fn list_layouts(
    State(state): State<AppState>,
    Query(params): Query<LayoutListQuery>,
) -> AppResult<impl IntoResponse> {
    let mut layouts = state.store.get_all_layouts().await?;
    apply_sort(&mut layouts, &params);

    Ok(Json(layouts))
}

/// GET /api/layouts/{id}
///
/// Retrieve a single layout by id. The id segment is parsed by hand so a
/// non-numeric id is a 400 rather than a routing miss.
pub async fn get_layout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id: DbId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid layout ID".into()))?;

    let layout = state
        .store
        .get_layout(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Layout",
            id,
        }))?;

    Ok(Json(layout))
}

/// GET /api/layouts/category/{category}
///
/// List active layouts whose category exactly matches the path segment.
/// An unknown category yields an empty array, not an error.
pub async fn layouts_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<impl IntoResponse> {
    let layouts = state.store.get_layouts_by_category(&category).await?;

    Ok(Json(layouts))
}

/// GET /api/layouts/search/{query}
///
/// Case-insensitive substring search over name, description, category,
/// features, and use cases.
pub async fn search_layouts(
    State(state): State<AppState>,
    Path(query): Path<String>,
    Query(params): Query<LayoutListQuery>,
) -> AppResult<impl IntoResponse> {
    if query.trim().is_empty() {
        return Err(AppError::BadRequest("Search query is required".into()));
    }

    let mut layouts = state.store.search_layouts(&query).await?;
    apply_sort(&mut layouts, &params);

    Ok(Json(layouts))
}

/// GET /api/categories
///
/// Distinct categories of active layouts, prefixed with the catch-all
/// "All Layouts" entry the frontend filter bar expects.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut categories = vec!["All Layouts".to_string()];
    categories.extend(state.store.categories().await?);

    Ok(Json(categories))
}
