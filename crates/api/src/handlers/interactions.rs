//! Handler for interaction tracking.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use gallery_core::interaction::{CreateInteraction, FieldViolation, InteractionType};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/interactions
///
/// Record one tracked user action. The payload is validated before any
/// storage write; on success the interaction is persisted and, for download
/// events with a layout id, the layout's download counter is bumped in a
/// separate best-effort step (a missing layout skips the bump but keeps the
/// interaction record).
pub async fn track_interaction(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let input: CreateInteraction =
        serde_json::from_value(body).map_err(|err| AppError::UnprocessableInput {
            message: "Invalid interaction data".into(),
            details: vec![FieldViolation {
                field: "body".into(),
                message: err.to_string(),
            }],
        })?;

    let new = input
        .validate()
        .map_err(|details| AppError::UnprocessableInput {
            message: "Invalid interaction data".into(),
            details,
        })?;

    let is_download = new.interaction_type == InteractionType::Download;
    let layout_id = new.layout_id;

    let interaction = state.store.create_interaction(new).await?;

    tracing::info!(
        interaction_id = interaction.id,
        interaction_type = interaction.interaction_type.as_str(),
        layout_id,
        "Interaction recorded",
    );

    if is_download {
        if let Some(layout_id) = layout_id {
            state.store.increment_download_count(layout_id).await?;
        }
    }

    Ok(Json(interaction))
}
