//! Layout entity and its value types.
//!
//! A layout is a catalog entry describing one UI design concept. Identity is
//! immutable; only `download_count` changes after creation (and `is_active`,
//! which soft-deletes the entry without removing it from storage).

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Difficulty tier of a layout, ordered `Medium < Advanced < Expert`.
///
/// Serialized capitalized (`"Medium"`, `"Advanced"`, `"Expert"`) to match
/// the catalog's wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Medium,
    Advanced,
    Expert,
}

impl Complexity {
    /// Fixed sort rank: `Medium=1`, `Advanced=2`, `Expert=3`.
    pub fn rank(self) -> u8 {
        match self {
            Complexity::Medium => 1,
            Complexity::Advanced => 2,
            Complexity::Expert => 3,
        }
    }
}

/// Numeric quality scores, each conceptually in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceScores {
    pub speed: u8,
    pub accessibility: u8,
    pub responsive: u8,
}

/// A catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub complexity: Complexity,
    pub use_cases: Vec<String>,
    pub features: Vec<String>,
    pub performance: PerformanceScores,
    /// Set at creation, never auto-updated afterwards.
    pub last_updated: Timestamp,
    /// Key into the frontend's icon mapping; opaque to this service.
    pub icon: String,
    pub download_count: i64,
    /// Soft-delete flag. Inactive layouts are excluded from list, category,
    /// and search reads but are retained in storage.
    pub is_active: bool,
}

/// DTO for creating a new layout.
///
/// Id, timestamp, download count, and active flag are assigned by the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLayout {
    pub name: String,
    pub category: String,
    pub description: String,
    pub complexity: Complexity,
    pub use_cases: Vec<String>,
    pub features: Vec<String>,
    pub performance: PerformanceScores,
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complexity_ranks_are_strictly_increasing() {
        assert!(Complexity::Medium.rank() < Complexity::Advanced.rank());
        assert!(Complexity::Advanced.rank() < Complexity::Expert.rank());
    }

    #[test]
    fn complexity_serializes_capitalized() {
        assert_eq!(
            serde_json::to_string(&Complexity::Advanced).unwrap(),
            "\"Advanced\""
        );
    }

    #[test]
    fn unknown_complexity_is_rejected_at_the_serde_boundary() {
        let result: Result<Complexity, _> = serde_json::from_str("\"Beginner\"");
        assert!(result.is_err());
    }
}
