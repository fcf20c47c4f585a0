//! Handler for aggregate interaction statistics.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
///
/// Totals plus the top five layouts by interaction count.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = state.store.interaction_stats().await?;

    Ok(Json(stats))
}
