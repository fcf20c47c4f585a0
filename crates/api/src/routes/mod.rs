pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /layouts                       list active layouts (optional ?sort=)
/// /layouts/{id}                  single layout by id
/// /layouts/category/{category}   active layouts in one category
/// /layouts/search/{query}        substring search (optional ?sort=)
/// /interactions                  record an interaction (POST)
/// /stats                         aggregate interaction statistics
/// /categories                    distinct categories, "All Layouts" first
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/layouts", get(handlers::layouts::list_layouts))
        .route("/layouts/{id}", get(handlers::layouts::get_layout))
        .route(
            "/layouts/category/{category}",
            get(handlers::layouts::layouts_by_category),
        )
        .route(
            "/layouts/search/{query}",
            get(handlers::layouts::search_layouts),
        )
        .route(
            "/interactions",
            post(handlers::interactions::track_interaction),
        )
        .route("/stats", get(handlers::stats::get_stats))
        .route("/categories", get(handlers::layouts::list_categories))
}
