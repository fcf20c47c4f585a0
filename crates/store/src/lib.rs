//! Catalog storage layer.
//!
//! [`CatalogStore`] is the storage abstraction the API layer is written
//! against; handlers receive it as `Arc<dyn CatalogStore>` so the in-memory
//! implementation ([`MemCatalog`]) can be swapped for a persistent backend
//! without touching the query engine or the HTTP surface.

pub mod memory;
pub mod seed;

use async_trait::async_trait;
use gallery_core::error::CoreError;
use gallery_core::interaction::{Interaction, NewInteraction};
use gallery_core::layout::{CreateLayout, Layout};
use gallery_core::stats::InteractionStats;
use gallery_core::types::DbId;

pub use memory::MemCatalog;

/// Authoritative store for layouts and interaction records.
///
/// Reads return snapshots; callers never observe a partially applied write.
/// All list-shaped reads filter out soft-deleted layouts except
/// [`get_layout`](CatalogStore::get_layout), which intentionally returns
/// deactivated entries for direct id lookup.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All active layouts, in insertion order.
    async fn get_all_layouts(&self) -> Result<Vec<Layout>, CoreError>;

    /// Look up a layout by id regardless of its active flag.
    async fn get_layout(&self, id: DbId) -> Result<Option<Layout>, CoreError>;

    /// Active layouts whose category exactly equals `category`
    /// (case-sensitive).
    async fn get_layouts_by_category(&self, category: &str) -> Result<Vec<Layout>, CoreError>;

    /// Store a new layout: assigns the next id, stamps `last_updated`,
    /// zeroes the download counter, and marks it active.
    async fn create_layout(&self, input: CreateLayout) -> Result<Layout, CoreError>;

    /// Increment a layout's download counter by one. Missing ids are a
    /// silent no-op, never an error.
    async fn increment_download_count(&self, id: DbId) -> Result<(), CoreError>;

    /// Active layouts matching the query engine's search predicate, in
    /// insertion order.
    async fn search_layouts(&self, query: &str) -> Result<Vec<Layout>, CoreError>;

    /// Append a validated interaction record: assigns the next id and
    /// stamps the server-side timestamp.
    async fn create_interaction(&self, input: NewInteraction) -> Result<Interaction, CoreError>;

    /// Aggregate statistics over the current snapshot.
    async fn interaction_stats(&self) -> Result<InteractionStats, CoreError>;

    /// Distinct categories of active layouts, in first-seen order.
    async fn categories(&self) -> Result<Vec<String>, CoreError>;
}
