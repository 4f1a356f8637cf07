//! Device-hierarchy data layer between `partsbay-api` and UI consumers.
//!
//! This crate owns the business logic, domain model, and cached data
//! infrastructure behind the admin console's device-management screen:
//!
//! - **[`Catalog`]** — Central facade managing the full lifecycle:
//!   [`refresh_all()`](Catalog::refresh_all) pulls the four source
//!   collections, mutations validate locally before touching the network,
//!   and every successful write invalidates and refetches the collections
//!   it affects. Nothing is patched optimistically — the store converges
//!   on server truth by reconstruction.
//!
//! - **[`CatalogStore`]** — Four independently cached collections (device
//!   types, brands, part categories, global category templates) behind
//!   `tokio::sync::watch` snapshots with per-collection loading flags.
//!
//! - **[`tree`]** — The pure tree assembler: flat collections in, ordered
//!   forest of [`HierarchyNode`]s out. Derived ids, deterministic, and
//!   tolerant of dangling references (orphans are dropped, never errors).
//!
//! - **[`SelectionState`]** — Single-selection + expansion state over the
//!   assembled tree, revalidated against the freshest snapshots so a
//!   stale selection silently clears instead of dangling.
//!
//! - **[`DisableState`]** — Two-phase confirm flow for cascading
//!   deactivation: stage, confirm (execute the cascade level by level),
//!   or cancel.

pub mod catalog;
pub mod config;
pub mod convert;
pub mod disable;
pub mod error;
pub mod icon;
pub mod model;
pub mod notice;
pub mod selection;
pub mod slug;
pub mod store;
pub mod tree;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::{Catalog, DeviceDraft, EditOutcome};
pub use config::CatalogConfig;
pub use disable::{DisableState, DisableTarget};
pub use error::CoreError;
pub use notice::{Notice, NoticeLevel, TOAST_TTL};
pub use selection::{SelectedNode, SelectionState};
pub use store::{CatalogStore, CollectionKind};
pub use tree::{HierarchyNode, NodeKind};

// Re-export model types at the crate root for ergonomics.
pub use model::{Brand, DeviceType, GlobalCategory, Model, ModelRef, PartCategory};
