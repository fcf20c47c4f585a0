//! In-memory [`CatalogStore`] implementation.

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use gallery_core::error::CoreError;
use gallery_core::interaction::{Interaction, NewInteraction};
use gallery_core::layout::{CreateLayout, Layout};
use gallery_core::query;
use gallery_core::stats::{self, InteractionStats};
use gallery_core::types::DbId;

use crate::CatalogStore;

/// Mutable store contents. Guarded as one unit so id assignment and
/// counter updates are atomic with respect to concurrent handlers.
struct CatalogInner {
    layouts: IndexMap<DbId, Layout>,
    interactions: IndexMap<DbId, Interaction>,
    next_layout_id: DbId,
    next_interaction_id: DbId,
}

/// In-memory catalog store.
///
/// Thread-safe via an interior `RwLock`; designed to be wrapped in `Arc`
/// and shared across handlers. Insertion order of the underlying maps is
/// the unspecified-but-stable iteration order the read operations expose.
pub struct MemCatalog {
    inner: RwLock<CatalogInner>,
}

impl MemCatalog {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CatalogInner {
                layouts: IndexMap::new(),
                interactions: IndexMap::new(),
                next_layout_id: 1,
                next_interaction_id: 1,
            }),
        }
    }

    /// A store pre-populated with the fixed sample catalog.
    pub fn with_seed_layouts() -> Self {
        let mut layouts = IndexMap::new();
        let mut next_layout_id = 1;
        for layout in crate::seed::sample_layouts() {
            next_layout_id = next_layout_id.max(layout.id + 1);
            layouts.insert(layout.id, layout);
        }

        Self {
            inner: RwLock::new(CatalogInner {
                layouts,
                interactions: IndexMap::new(),
                next_layout_id,
                next_interaction_id: 1,
            }),
        }
    }
}

impl Default for MemCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for MemCatalog {
    async fn get_all_layouts(&self) -> Result<Vec<Layout>, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .layouts
            .values()
            .filter(|l| l.is_active)
            .cloned()
            .collect())
    }

    async fn get_layout(&self, id: DbId) -> Result<Option<Layout>, CoreError> {
        let inner = self.inner.read().await;
        // Deliberately not filtered by is_active: direct lookup can see
        // deactivated layouts.
        Ok(inner.layouts.get(&id).cloned())
    }

    async fn get_layouts_by_category(&self, category: &str) -> Result<Vec<Layout>, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .layouts
            .values()
            .filter(|l| l.is_active && l.category == category)
            .cloned()
            .collect())
    }

    async fn create_layout(&self, input: CreateLayout) -> Result<Layout, CoreError> {
        let mut inner = self.inner.write().await;

        let id = inner.next_layout_id;
        inner.next_layout_id += 1;

        let layout = Layout {
            id,
            name: input.name,
            category: input.category,
            description: input.description,
            complexity: input.complexity,
            use_cases: input.use_cases,
            features: input.features,
            performance: input.performance,
            last_updated: Utc::now(),
            icon: input.icon,
            download_count: 0,
            is_active: true,
        };

        inner.layouts.insert(id, layout.clone());
        Ok(layout)
    }

    async fn increment_download_count(&self, id: DbId) -> Result<(), CoreError> {
        let mut inner = self.inner.write().await;
        match inner.layouts.get_mut(&id) {
            Some(layout) => layout.download_count += 1,
            None => {
                tracing::debug!(layout_id = id, "Download count increment skipped, layout not found");
            }
        }
        Ok(())
    }

    async fn search_layouts(&self, query: &str) -> Result<Vec<Layout>, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .layouts
            .values()
            .filter(|l| l.is_active && query::matches_query(l, query))
            .cloned()
            .collect())
    }

    async fn create_interaction(&self, input: NewInteraction) -> Result<Interaction, CoreError> {
        let mut inner = self.inner.write().await;

        let id = inner.next_interaction_id;
        inner.next_interaction_id += 1;

        let interaction = Interaction {
            id,
            layout_id: input.layout_id,
            interaction_type: input.interaction_type,
            timestamp: Utc::now(),
            user_agent: input.user_agent,
            session_id: input.session_id,
        };

        inner.interactions.insert(id, interaction.clone());
        Ok(interaction)
    }

    async fn interaction_stats(&self) -> Result<InteractionStats, CoreError> {
        let inner = self.inner.read().await;
        let interactions: Vec<Interaction> = inner.interactions.values().cloned().collect();
        let layouts: Vec<Layout> = inner.layouts.values().cloned().collect();
        Ok(stats::interaction_stats(&interactions, &layouts))
    }

    async fn categories(&self) -> Result<Vec<String>, CoreError> {
        let inner = self.inner.read().await;
        let mut categories: Vec<String> = Vec::new();
        for layout in inner.layouts.values().filter(|l| l.is_active) {
            if !categories.contains(&layout.category) {
                categories.push(layout.category.clone());
            }
        }
        Ok(categories)
    }
}
