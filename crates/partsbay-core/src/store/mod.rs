//! Cached storage for the four source collections.
//!
//! Each collection is fetched independently and cached as a unit; the
//! lifecycle is always invalidate → refetch → replace. Between
//! replacements every consumer works off immutable `Arc` snapshots, so
//! there is nothing to lock and no way to observe a half-applied update.
//! Collections can be stale relative to one another (a brand referencing
//! a just-deleted device); the tree assembler tolerates that by design.

mod collection;

use std::sync::Arc;

use tokio::sync::watch;

use crate::model::{Brand, DeviceType, GlobalCategory, PartCategory};
use collection::Collection;

/// Identifies one of the four cached collections, for targeted
/// invalidation after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    DeviceTypes,
    Brands,
    PartCategories,
    GlobalCategories,
}

impl CollectionKind {
    /// All four collections, in refresh order.
    pub const ALL: [Self; 4] = [
        Self::DeviceTypes,
        Self::Brands,
        Self::PartCategories,
        Self::GlobalCategories,
    ];
}

/// The four in-memory collections behind the device-management screen.
///
/// This is the only shared mutable state in the core; everything else is
/// derived from its snapshots. Passed explicitly — there is no ambient
/// singleton.
pub struct CatalogStore {
    pub(crate) device_types: Collection<DeviceType>,
    pub(crate) brands: Collection<Brand>,
    pub(crate) part_categories: Collection<PartCategory>,
    pub(crate) global_categories: Collection<GlobalCategory>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            device_types: Collection::new(),
            brands: Collection::new(),
            part_categories: Collection::new(),
            global_categories: Collection::new(),
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn device_types_snapshot(&self) -> Arc<Vec<Arc<DeviceType>>> {
        self.device_types.snapshot()
    }

    pub fn brands_snapshot(&self) -> Arc<Vec<Arc<Brand>>> {
        self.brands.snapshot()
    }

    pub fn part_categories_snapshot(&self) -> Arc<Vec<Arc<PartCategory>>> {
        self.part_categories.snapshot()
    }

    pub fn global_categories_snapshot(&self) -> Arc<Vec<Arc<GlobalCategory>>> {
        self.global_categories.snapshot()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_device_types(&self) -> watch::Receiver<Arc<Vec<Arc<DeviceType>>>> {
        self.device_types.subscribe()
    }

    pub fn subscribe_brands(&self) -> watch::Receiver<Arc<Vec<Arc<Brand>>>> {
        self.brands.subscribe()
    }

    pub fn subscribe_part_categories(&self) -> watch::Receiver<Arc<Vec<Arc<PartCategory>>>> {
        self.part_categories.subscribe()
    }

    pub fn subscribe_global_categories(&self) -> watch::Receiver<Arc<Vec<Arc<GlobalCategory>>>> {
        self.global_categories.subscribe()
    }

    // ── Loading state ────────────────────────────────────────────────

    /// `true` while any of the four fetches is in flight. Selection
    /// revalidation is skipped in that window to avoid transient false
    /// invalidation mid-reload.
    pub fn any_loading(&self) -> bool {
        self.device_types.is_loading()
            || self.brands.is_loading()
            || self.part_categories.is_loading()
            || self.global_categories.is_loading()
    }

    pub fn is_loading(&self, kind: CollectionKind) -> bool {
        match kind {
            CollectionKind::DeviceTypes => self.device_types.is_loading(),
            CollectionKind::Brands => self.brands.is_loading(),
            CollectionKind::PartCategories => self.part_categories.is_loading(),
            CollectionKind::GlobalCategories => self.global_categories.is_loading(),
        }
    }

    /// `true` once every collection has completed at least one fetch.
    /// Gates the one-time default expansion.
    pub fn fully_loaded(&self) -> bool {
        self.device_types.last_refresh().is_some()
            && self.brands.last_refresh().is_some()
            && self.part_categories.last_refresh().is_some()
            && self.global_categories.last_refresh().is_some()
    }

    // ── Counts ───────────────────────────────────────────────────────

    pub fn device_type_count(&self) -> usize {
        self.device_types.len()
    }

    pub fn brand_count(&self) -> usize {
        self.brands.len()
    }

    pub fn part_category_count(&self) -> usize {
        self.part_categories.len()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn device(id: &str, slug: &str) -> DeviceType {
        DeviceType {
            id: id.into(),
            name: slug.to_uppercase(),
            slug: slug.into(),
            icon: None,
            is_active: true,
            order: 0,
        }
    }

    #[test]
    fn any_loading_reflects_each_collection() {
        let store = CatalogStore::new();
        assert!(!store.any_loading());

        store.brands.invalidate();
        assert!(store.any_loading());
        assert!(store.is_loading(CollectionKind::Brands));
        assert!(!store.is_loading(CollectionKind::DeviceTypes));

        store.brands.replace(Vec::new());
        assert!(!store.any_loading());
    }

    #[test]
    fn fully_loaded_requires_all_four() {
        let store = CatalogStore::new();
        assert!(!store.fully_loaded());

        store.device_types.replace(vec![device("d1", "mobile")]);
        store.brands.replace(Vec::new());
        store.part_categories.replace(Vec::new());
        assert!(!store.fully_loaded());

        store.global_categories.replace(Vec::new());
        assert!(store.fully_loaded());
    }

    #[test]
    fn snapshots_are_immutable_between_replacements() {
        let store = CatalogStore::new();
        store.device_types.replace(vec![device("d1", "mobile")]);

        let before = store.device_types_snapshot();
        store.device_types.replace(vec![
            device("d1", "mobile"),
            device("d2", "laptop"),
        ]);

        // The old snapshot is untouched; only new borrows see the update.
        assert_eq!(before.len(), 1);
        assert_eq!(store.device_types_snapshot().len(), 2);
    }
}
