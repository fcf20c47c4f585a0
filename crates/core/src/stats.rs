//! Interaction statistics aggregation.

use indexmap::IndexMap;
use serde::Serialize;

use crate::interaction::{Interaction, InteractionType};
use crate::layout::Layout;
use crate::types::DbId;

/// How many layouts the popularity ranking reports.
pub const POPULAR_LAYOUT_LIMIT: usize = 5;

/// Name used when a counted layout id no longer resolves.
const UNKNOWN_LAYOUT_NAME: &str = "Unknown";

/// One entry of the popularity ranking.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularLayout {
    pub layout_id: DbId,
    pub layout_name: String,
    pub count: i64,
}

/// Aggregate statistics over all recorded interactions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionStats {
    pub total_interactions: i64,
    pub total_downloads: i64,
    pub popular_layouts: Vec<PopularLayout>,
}

/// Compute aggregate statistics from a snapshot of interactions and layouts.
///
/// `popular_layouts` ranks layout ids by interaction count across all
/// interaction types (layout-independent events are not counted), truncated
/// to [`POPULAR_LAYOUT_LIMIT`]. The count map is insertion-ordered and the
/// sort is stable, so ties keep first-appearance order.
pub fn interaction_stats(interactions: &[Interaction], layouts: &[Layout]) -> InteractionStats {
    let total_downloads = interactions
        .iter()
        .filter(|i| i.interaction_type == InteractionType::Download)
        .count() as i64;

    let mut counts: IndexMap<DbId, i64> = IndexMap::new();
    for interaction in interactions {
        if let Some(layout_id) = interaction.layout_id {
            *counts.entry(layout_id).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(DbId, i64)> = counts.into_iter().collect();
    ranked.sort_by(|(_, a), (_, b)| b.cmp(a));

    let popular_layouts = ranked
        .into_iter()
        .take(POPULAR_LAYOUT_LIMIT)
        .map(|(layout_id, count)| PopularLayout {
            layout_id,
            layout_name: layouts
                .iter()
                .find(|l| l.id == layout_id)
                .map(|l| l.name.clone())
                .unwrap_or_else(|| UNKNOWN_LAYOUT_NAME.to_string()),
            count,
        })
        .collect();

    InteractionStats {
        total_interactions: interactions.len() as i64,
        total_downloads,
        popular_layouts,
    }
}
