//! Catalog query engine: search predicate and sorting.
//!
//! These are pure functions over borrowed layout data. The same logic
//! serves the HTTP surface and any embedded caller, so filter/sort rules
//! exist exactly once.

use crate::layout::Layout;

/// Case-insensitive substring match against a layout's searchable text.
///
/// A layout matches if the query occurs in its name, description, or
/// category, or in any entry of its feature or use-case lists. Empty or
/// whitespace-only queries are rejected at the API boundary, not here.
pub fn matches_query(layout: &Layout, query: &str) -> bool {
    let needle = query.to_lowercase();

    layout.name.to_lowercase().contains(&needle)
        || layout.description.to_lowercase().contains(&needle)
        || layout.category.to_lowercase().contains(&needle)
        || layout
            .features
            .iter()
            .any(|f| f.to_lowercase().contains(&needle))
        || layout
            .use_cases
            .iter()
            .any(|u| u.to_lowercase().contains(&needle))
}

/// Recognized sort orderings for layout sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Name, case-insensitive lexicographic ascending.
    Name,
    /// Complexity rank ascending (`Medium < Advanced < Expert`).
    Complexity,
    /// Category, case-insensitive lexicographic ascending.
    Category,
    /// `last_updated` descending (most recent first).
    Updated,
    /// `download_count` descending.
    Downloads,
}

impl SortKey {
    /// Parse a wire value. Unrecognized values return `None`; callers leave
    /// the sequence in storage order in that case.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(SortKey::Name),
            "complexity" => Some(SortKey::Complexity),
            "category" => Some(SortKey::Category),
            "updated" => Some(SortKey::Updated),
            "downloads" => Some(SortKey::Downloads),
            _ => None,
        }
    }
}

/// Stable-sort layouts in place by the given key.
pub fn sort_layouts(layouts: &mut [Layout], key: SortKey) {
    match key {
        SortKey::Name => layouts.sort_by_key(|l| l.name.to_lowercase()),
        SortKey::Complexity => layouts.sort_by_key(|l| l.complexity.rank()),
        SortKey::Category => layouts.sort_by_key(|l| l.category.to_lowercase()),
        SortKey::Updated => layouts.sort_by(|a, b| b.last_updated.cmp(&a.last_updated)),
        SortKey::Downloads => layouts.sort_by(|a, b| b.download_count.cmp(&a.download_count)),
    }
}
