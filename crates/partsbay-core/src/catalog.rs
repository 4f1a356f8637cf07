// ── Catalog facade ──
//
// Full lifecycle management for one catalog backend: collection
// refresh, tree/search derivation, and every mutation the device
// management screen performs. Mutations share one pattern — validate
// locally against the in-memory snapshots, call the endpoint(s),
// invalidate and refetch the affected collections, then notify. Nothing
// is applied optimistically; the store converges on server truth by
// reconstruction.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::join_all;
use tokio::sync::{broadcast, watch};
use tracing::{debug, warn};

use partsbay_api::CatalogClient;
use partsbay_api::types::{
    CreateBrandRequest, CreateDeviceTypeRequest, CreatePartCategoryRequest, UpdateBrandRequest,
    UpdateDeviceTypeRequest, UpdatePartCategoryRequest,
};

use crate::config::CatalogConfig;
use crate::convert::full_brand_update;
use crate::disable::{DisableState, DisableTarget};
use crate::error::CoreError;
use crate::model::{Brand, DeviceType, GlobalCategory, Model, ModelRef, PartCategory};
use crate::notice::Notice;
use crate::selection::SelectionState;
use crate::store::{CatalogStore, CollectionKind};
use crate::tree::{self, HierarchyNode};
use crate::{icon, slug};

const NOTICE_CHANNEL_SIZE: usize = 64;

// ── Edit payloads ───────────────────────────────────────────────────

/// Draft of a device-type edit panel.
#[derive(Debug, Clone)]
pub struct DeviceDraft {
    pub name: String,
    pub icon: Option<String>,
    pub is_active: bool,
}

/// Outcome of saving a device edit.
///
/// Deactivating an active device never applies directly — it redirects
/// into the disable-confirmation flow, because deactivation cascades and
/// the user must confirm it.
#[derive(Debug, Clone)]
pub enum EditOutcome {
    Saved(DeviceType),
    DisableRequested(DisableTarget),
}

// ── Catalog ─────────────────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Owns the API client, the [`CatalogStore`], the toast channel, the
/// inline-error slot, and the disable-flow state. All state is behind
/// watch/broadcast channels, so methods take `&self` and any front end
/// can subscribe.
pub struct Catalog {
    client: CatalogClient,
    store: CatalogStore,
    notices: broadcast::Sender<Notice>,
    inline_error: watch::Sender<Option<String>>,
    disable_state: watch::Sender<DisableState>,
}

impl Catalog {
    /// Build a catalog from configuration. Does not fetch anything —
    /// call [`refresh_all()`](Self::refresh_all) for the initial load.
    pub fn new(config: &CatalogConfig) -> Result<Self, CoreError> {
        let client = CatalogClient::new(
            config.base_url.as_str(),
            config.token.as_ref(),
            &config.transport,
        )?;
        Ok(Self::with_client(client))
    }

    /// Wrap an existing client (used by tests with a mock backend).
    pub fn with_client(client: CatalogClient) -> Self {
        let (notices, _) = broadcast::channel(NOTICE_CHANNEL_SIZE);
        let (inline_error, _) = watch::channel(None);
        let (disable_state, _) = watch::channel(DisableState::Idle);

        Self {
            client,
            store: CatalogStore::new(),
            notices,
            inline_error,
            disable_state,
        }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    // ── State observation ────────────────────────────────────────────

    /// Subscribe to toast notices.
    pub fn notices(&self) -> broadcast::Receiver<Notice> {
        self.notices.subscribe()
    }

    /// Subscribe to the inline error slot. `None` means cleared; the
    /// value persists until the next user action.
    pub fn inline_error(&self) -> watch::Receiver<Option<String>> {
        self.inline_error.subscribe()
    }

    /// Subscribe to disable-flow state transitions.
    pub fn disable_state(&self) -> watch::Receiver<DisableState> {
        self.disable_state.subscribe()
    }

    /// The currently staged disable target, if any.
    pub fn staged_disable(&self) -> Option<DisableTarget> {
        self.disable_state.borrow().staged().cloned()
    }

    // ── Refresh ──────────────────────────────────────────────────────

    /// Invalidate and refetch all four collections.
    pub async fn refresh_all(&self) -> Result<(), CoreError> {
        self.refresh(&CollectionKind::ALL).await
    }

    /// Invalidate and refetch the given collections, concurrently.
    ///
    /// Successful fetches replace their snapshots even when a sibling
    /// fetch fails; the first failure is reported (inline + toast) and
    /// returned, and the failed collection keeps its previous snapshot.
    pub async fn refresh(&self, kinds: &[CollectionKind]) -> Result<(), CoreError> {
        let want = |kind: CollectionKind| kinds.contains(&kind);

        if want(CollectionKind::DeviceTypes) {
            self.store.device_types.invalidate();
        }
        if want(CollectionKind::Brands) {
            self.store.brands.invalidate();
        }
        if want(CollectionKind::PartCategories) {
            self.store.part_categories.invalidate();
        }
        if want(CollectionKind::GlobalCategories) {
            self.store.global_categories.invalidate();
        }

        let (device_types_res, brands_res, part_categories_res, global_categories_res) = tokio::join!(
            async {
                if want(CollectionKind::DeviceTypes) {
                    Some(self.client.list_device_types().await)
                } else {
                    None
                }
            },
            async {
                if want(CollectionKind::Brands) {
                    Some(self.client.list_brands().await)
                } else {
                    None
                }
            },
            async {
                if want(CollectionKind::PartCategories) {
                    Some(self.client.list_part_categories().await)
                } else {
                    None
                }
            },
            async {
                if want(CollectionKind::GlobalCategories) {
                    Some(self.client.list_global_categories().await)
                } else {
                    None
                }
            },
        );

        let mut first_err: Option<partsbay_api::Error> = None;

        if let Some(result) = device_types_res {
            match result {
                Ok(list) => self
                    .store
                    .device_types
                    .replace(list.into_iter().map(DeviceType::from).collect()),
                Err(e) => {
                    warn!(error = %e, "device type fetch failed");
                    self.store.device_types.abort_refresh();
                    first_err.get_or_insert(e);
                }
            }
        }

        if let Some(result) = brands_res {
            match result {
                Ok(list) => self
                    .store
                    .brands
                    .replace(list.into_iter().map(Brand::from).collect()),
                Err(e) => {
                    warn!(error = %e, "brand fetch failed");
                    self.store.brands.abort_refresh();
                    first_err.get_or_insert(e);
                }
            }
        }

        if let Some(result) = part_categories_res {
            match result {
                Ok(list) => self
                    .store
                    .part_categories
                    .replace(list.into_iter().map(PartCategory::from).collect()),
                Err(e) => {
                    warn!(error = %e, "part category fetch failed");
                    self.store.part_categories.abort_refresh();
                    first_err.get_or_insert(e);
                }
            }
        }

        if let Some(result) = global_categories_res {
            match result {
                Ok(list) => self
                    .store
                    .global_categories
                    .replace(list.into_iter().map(GlobalCategory::from).collect()),
                Err(e) => {
                    warn!(error = %e, "global category fetch failed");
                    self.store.global_categories.abort_refresh();
                    first_err.get_or_insert(e);
                }
            }
        }

        if let Some(e) = first_err {
            let err = CoreError::from(e);
            self.report_failure(&err);
            return Err(err);
        }

        debug!(
            device_types = self.store.device_type_count(),
            brands = self.store.brand_count(),
            part_categories = self.store.part_category_count(),
            "collection refresh complete"
        );
        Ok(())
    }

    // ── Derived views ────────────────────────────────────────────────

    /// Assemble the hierarchy forest from the current snapshots.
    pub fn tree(&self) -> Vec<HierarchyNode> {
        tree::assemble(
            &self.store.device_types_snapshot(),
            &self.store.brands_snapshot(),
            &self.store.part_categories_snapshot(),
        )
    }

    /// Assemble and filter in one step. Returns the pruned forest plus
    /// the node ids to force-expand.
    pub fn search(&self, query: &str) -> (Vec<HierarchyNode>, HashSet<String>) {
        tree::filter(&self.tree(), query)
    }

    /// Revalidate a selection against the current snapshots.
    pub fn revalidate_selection(&self, selection: &mut SelectionState) {
        selection.revalidate(&self.store);
    }

    /// Global category templates not already present for the device,
    /// deduplicated by normalized name, ordered for display.
    pub fn available_templates(&self, device_id: &str) -> Vec<Arc<GlobalCategory>> {
        let existing = self.store.part_categories_snapshot();
        let existing: Vec<&Arc<PartCategory>> = existing
            .iter()
            .filter(|c| c.device_id == device_id)
            .collect();

        let mut templates: Vec<Arc<GlobalCategory>> = self
            .store
            .global_categories_snapshot()
            .iter()
            .filter(|t| !existing.iter().any(|c| slug::eq_normalized(&c.name, &t.name)))
            .cloned()
            .collect();
        templates.sort_by(|a, b| {
            a.order
                .cmp(&b.order)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        templates
    }

    // ── Add operations ───────────────────────────────────────────────

    /// Create a device type from a display name.
    ///
    /// Slug is derived and deduplicated against every existing device
    /// slug; the icon is guessed from keywords; `order` lands after the
    /// current maximum.
    pub async fn add_device(&self, name: &str) -> Result<DeviceType, CoreError> {
        self.begin_action();
        let name = name.trim();
        if name.is_empty() {
            return Err(self.validation("Device name is required"));
        }

        let devices = self.store.device_types_snapshot();
        if devices.iter().any(|d| slug::eq_normalized(&d.name, name)) {
            return Err(self.validation(format!("A device type named '{name}' already exists")));
        }

        let req = CreateDeviceTypeRequest {
            name: name.to_owned(),
            slug: slug::unique_slug(name, devices.iter().map(|d| d.slug.as_str())),
            icon: icon::guess_icon(name).to_owned(),
            is_active: true,
            order: devices.iter().map(|d| d.order).max().map_or(0, |m| m + 1),
        };

        let created = self.api(self.client.create_device_type(&req)).await?;
        self.refresh(&[CollectionKind::DeviceTypes]).await?;
        self.toast_success(format!("Device type '{name}' added"));
        Ok(DeviceType::from(created))
    }

    /// Create a brand under a device type. Duplicate check and slug
    /// scope are per-device, not global.
    pub async fn add_brand(&self, device_id: &str, name: &str) -> Result<Brand, CoreError> {
        self.begin_action();
        let device = self
            .device_by_id(device_id)
            .ok_or_else(|| self.validation("Select a device type first"))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(self.validation("Brand name is required"));
        }

        let brands = self.store.brands_snapshot();
        let siblings: Vec<&Arc<Brand>> = brands
            .iter()
            .filter(|b| b.category_slug == device.slug)
            .collect();
        if siblings.iter().any(|b| slug::eq_normalized(&b.name, name)) {
            return Err(self.validation(format!(
                "{} already has a brand named '{name}'",
                device.name
            )));
        }

        let req = CreateBrandRequest {
            category_slug: device.slug.clone(),
            name: name.to_owned(),
            slug: slug::unique_slug(name, siblings.iter().map(|b| b.slug.as_str())),
            models: Vec::new(),
            is_active: true,
        };

        let created = self.api(self.client.create_brand(&req)).await?;
        self.refresh(&[CollectionKind::Brands]).await?;
        self.toast_success(format!("Brand '{name}' added to {}", device.name));
        Ok(Brand::from(created))
    }

    /// Append a model to a brand. There is no per-model endpoint — the
    /// whole brand is resubmitted with the extended `models` array.
    pub async fn add_model(
        &self,
        brand_id: &str,
        name: &str,
        model_number: Option<&str>,
        release_year: Option<u16>,
    ) -> Result<ModelRef, CoreError> {
        self.begin_action();
        let brand = self
            .brand_by_id(brand_id)
            .ok_or_else(|| self.validation("Select a brand first"))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(self.validation("Model name is required"));
        }
        if brand
            .models
            .iter()
            .any(|m| slug::eq_normalized(&m.name, name))
        {
            return Err(self.validation(format!(
                "{} already has a model named '{name}'",
                brand.name
            )));
        }

        let model_slug = slug::unique_slug(
            name,
            brand.models.iter().filter_map(|m| m.slug.as_deref()),
        );

        let mut updated = (*brand).clone();
        updated.models.push(Model {
            name: name.to_owned(),
            model_number: model_number
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned),
            release_year,
            is_active: Some(true),
            slug: Some(model_slug),
        });
        let index = updated.models.len() - 1;

        self.api(self.client.update_brand(&brand.id, &full_brand_update(&updated)))
            .await?;
        self.refresh(&[CollectionKind::Brands]).await?;
        self.toast_success(format!("Model '{name}' added to {}", brand.name));
        Ok(ModelRef::new(brand.id.clone(), index))
    }

    /// Create a part category under a device's parts-root.
    ///
    /// Both entry points — a typed name+icon and a one-click template —
    /// funnel through this validator.
    pub async fn add_part_category(
        &self,
        device_id: &str,
        name: &str,
        icon: Option<&str>,
    ) -> Result<PartCategory, CoreError> {
        self.begin_action();
        let device = self
            .device_by_id(device_id)
            .ok_or_else(|| self.validation("Select a device type first"))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(self.validation("Category name is required"));
        }

        let categories = self.store.part_categories_snapshot();
        let siblings: Vec<&Arc<PartCategory>> = categories
            .iter()
            .filter(|c| c.device_id == device.id)
            .collect();
        if siblings.iter().any(|c| slug::eq_normalized(&c.name, name)) {
            return Err(self.validation(format!(
                "{} already has a category named '{name}'",
                device.name
            )));
        }

        let req = CreatePartCategoryRequest {
            device_id: device.id.clone(),
            name: name.to_owned(),
            slug: slug::unique_slug(name, siblings.iter().map(|c| c.slug.as_str())),
            icon: icon
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned),
        };

        let created = self.api(self.client.create_part_category(&req)).await?;
        self.refresh(&[CollectionKind::PartCategories]).await?;
        self.toast_success(format!("Category '{name}' added to {}", device.name));
        Ok(PartCategory::from(created))
    }

    /// One-click quick-add from a global category template.
    pub async fn add_part_category_from_template(
        &self,
        device_id: &str,
        template: &GlobalCategory,
    ) -> Result<PartCategory, CoreError> {
        self.add_part_category(device_id, &template.name, template.icon.as_deref())
            .await
    }

    // ── Rename / edit operations ─────────────────────────────────────

    /// Rename a device type. Uniqueness is re-checked against the other
    /// devices; the slug is left alone (it anchors brand references).
    pub async fn rename_device(&self, id: &str, new_name: &str) -> Result<(), CoreError> {
        self.begin_action();
        let device = self
            .device_by_id(id)
            .ok_or_else(|| self.validation("Device type not found"))?;
        let name = self.required_name(new_name, "Device name is required")?;

        let devices = self.store.device_types_snapshot();
        if devices
            .iter()
            .any(|d| d.id != device.id && slug::eq_normalized(&d.name, &name))
        {
            return Err(self.validation(format!("A device type named '{name}' already exists")));
        }

        let req = UpdateDeviceTypeRequest {
            name: Some(name.clone()),
            ..UpdateDeviceTypeRequest::default()
        };
        self.api(self.client.update_device_type(&device.id, &req))
            .await?;
        self.refresh(&[CollectionKind::DeviceTypes]).await?;
        self.toast_success(format!("Device type renamed to '{name}'"));
        Ok(())
    }

    /// Save a device edit panel.
    ///
    /// Flipping an active device to inactive is *not* applied — it stages
    /// a disable request for confirmation instead, because deactivation
    /// cascades. Every other change applies directly.
    pub async fn save_device_edit(
        &self,
        id: &str,
        draft: &DeviceDraft,
    ) -> Result<EditOutcome, CoreError> {
        self.begin_action();
        let device = self
            .device_by_id(id)
            .ok_or_else(|| self.validation("Device type not found"))?;
        let name = self.required_name(&draft.name, "Device name is required")?;

        let devices = self.store.device_types_snapshot();
        if devices
            .iter()
            .any(|d| d.id != device.id && slug::eq_normalized(&d.name, &name))
        {
            return Err(self.validation(format!("A device type named '{name}' already exists")));
        }

        if device.is_active && !draft.is_active {
            let target = DisableTarget::Device {
                id: device.id.clone(),
            };
            self.request_disable(target.clone())?;
            return Ok(EditOutcome::DisableRequested(target));
        }

        let req = UpdateDeviceTypeRequest {
            name: Some(name.clone()),
            icon: draft
                .icon
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned),
            is_active: Some(draft.is_active),
            order: None,
        };
        let updated = self
            .api(self.client.update_device_type(&device.id, &req))
            .await?;
        self.refresh(&[CollectionKind::DeviceTypes]).await?;
        self.toast_success(format!("Device type '{name}' saved"));
        Ok(EditOutcome::Saved(DeviceType::from(updated)))
    }

    /// Rename a brand. Uniqueness is scoped to its device's brands.
    pub async fn rename_brand(&self, id: &str, new_name: &str) -> Result<(), CoreError> {
        self.begin_action();
        let brand = self
            .brand_by_id(id)
            .ok_or_else(|| self.validation("Brand not found"))?;
        let name = self.required_name(new_name, "Brand name is required")?;

        let brands = self.store.brands_snapshot();
        if brands.iter().any(|b| {
            b.id != brand.id
                && b.category_slug == brand.category_slug
                && slug::eq_normalized(&b.name, &name)
        }) {
            return Err(self.validation(format!("A brand named '{name}' already exists here")));
        }

        let mut updated = (*brand).clone();
        updated.name = name.clone();
        self.api(self.client.update_brand(&brand.id, &full_brand_update(&updated)))
            .await?;
        self.refresh(&[CollectionKind::Brands]).await?;
        self.toast_success(format!("Brand renamed to '{name}'"));
        Ok(())
    }

    /// Rename a model in place.
    ///
    /// The slug is recomputed against the sibling model slugs (excluding
    /// the model being edited) and the whole brand is resubmitted.
    pub async fn rename_model(&self, mref: &ModelRef, new_name: &str) -> Result<(), CoreError> {
        self.begin_action();
        let brand = self
            .brand_by_id(&mref.brand_id)
            .ok_or_else(|| self.validation("Model no longer exists"))?;
        if mref.index >= brand.models.len() {
            return Err(self.validation("Model no longer exists"));
        }
        let name = self.required_name(new_name, "Model name is required")?;

        if brand
            .models
            .iter()
            .enumerate()
            .any(|(i, m)| i != mref.index && slug::eq_normalized(&m.name, &name))
        {
            return Err(self.validation(format!(
                "{} already has a model named '{name}'",
                brand.name
            )));
        }

        let sibling_slugs: Vec<&str> = brand
            .models
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != mref.index)
            .filter_map(|(_, m)| m.slug.as_deref())
            .collect();
        let model_slug = slug::unique_slug(&name, sibling_slugs);

        let mut updated = (*brand).clone();
        if let Some(entry) = updated.models.get_mut(mref.index) {
            entry.name = name.clone();
            entry.slug = Some(model_slug);
        }
        self.api(self.client.update_brand(&brand.id, &full_brand_update(&updated)))
            .await?;
        self.refresh(&[CollectionKind::Brands]).await?;
        self.toast_success(format!("Model renamed to '{name}'"));
        Ok(())
    }

    /// Rename a part category. Uniqueness is scoped to its device.
    pub async fn rename_part_category(&self, id: &str, new_name: &str) -> Result<(), CoreError> {
        self.begin_action();
        let category = self
            .part_category_by_id(id)
            .ok_or_else(|| self.validation("Part category not found"))?;
        let name = self.required_name(new_name, "Category name is required")?;

        let categories = self.store.part_categories_snapshot();
        if categories.iter().any(|c| {
            c.id != category.id
                && c.device_id == category.device_id
                && slug::eq_normalized(&c.name, &name)
        }) {
            return Err(self.validation(format!("A category named '{name}' already exists here")));
        }

        let req = UpdatePartCategoryRequest {
            name: Some(name.clone()),
            ..UpdatePartCategoryRequest::default()
        };
        self.api(self.client.patch_part_category(&category.id, &req))
            .await?;
        self.refresh(&[CollectionKind::PartCategories]).await?;
        self.toast_success(format!("Category renamed to '{name}'"));
        Ok(())
    }

    // ── Delete operations ────────────────────────────────────────────
    //
    // Deletes are server-authoritative (no client-side cascade); all
    // four collections are refetched so dangling references converge.

    pub async fn delete_device_type(&self, id: &str) -> Result<(), CoreError> {
        self.begin_action();
        let device = self
            .device_by_id(id)
            .ok_or_else(|| self.validation("Device type not found"))?;

        self.api(self.client.delete_device_type(&device.id)).await?;
        self.refresh_all().await?;
        self.toast_success(format!("Device type '{}' deleted", device.name));
        Ok(())
    }

    pub async fn delete_brand(&self, id: &str) -> Result<(), CoreError> {
        self.begin_action();
        let brand = self
            .brand_by_id(id)
            .ok_or_else(|| self.validation("Brand not found"))?;

        self.api(self.client.delete_brand(&brand.id)).await?;
        self.refresh(&[CollectionKind::Brands]).await?;
        self.toast_success(format!("Brand '{}' deleted", brand.name));
        Ok(())
    }

    // ── Disable flow ─────────────────────────────────────────────────

    /// Stage a disable target for confirmation. Nothing is mutated.
    pub fn request_disable(&self, target: DisableTarget) -> Result<(), CoreError> {
        let next = self
            .disable_state
            .borrow()
            .stage(target)
            .map_err(|e| self.note_validation(e))?;
        let _ = self.disable_state.send(next);
        Ok(())
    }

    /// Discard the staged target.
    ///
    /// Returns the entity's *true* current active flag so a presentation
    /// layer can restore a draft toggle it flipped optimistically.
    /// `None` if nothing was staged.
    pub fn cancel_disable(&self) -> Option<bool> {
        let staged = self.disable_state.borrow().staged().cloned()?;
        let _ = self.disable_state.send(DisableState::Idle);
        Some(self.current_active_flag(&staged).unwrap_or(true))
    }

    /// Execute the staged disable cascade.
    ///
    /// Cross-level order is awaited: the target entity first, then its
    /// children (siblings at one level dispatched concurrently). The
    /// cascade is not transactional — completed sub-steps are not rolled
    /// back on a later failure; the first error is surfaced once. The
    /// stage clears and all four collections refetch either way.
    pub async fn confirm_disable(&self) -> Result<(), CoreError> {
        self.begin_action();
        let (next, target) = self
            .disable_state
            .borrow()
            .begin_execute()
            .map_err(|e| self.note_validation(e))?;
        let _ = self.disable_state.send(next);

        let result = self.execute_cascade(&target).await;

        let _ = self.disable_state.send(DisableState::Idle);
        let refresh_result = self.refresh_all().await;

        match result {
            Ok(()) => {
                self.toast_success(format!("{} disabled", target.describe()));
                refresh_result
            }
            Err(e) => {
                self.report_failure(&e);
                Err(e)
            }
        }
    }

    async fn execute_cascade(&self, target: &DisableTarget) -> Result<(), CoreError> {
        match target {
            DisableTarget::Device { id } => {
                let device = self
                    .device_by_id(id)
                    .ok_or_else(|| CoreError::validation("Device type no longer exists"))?;

                // The device itself first — children are only touched
                // once the parent update has gone through.
                let req = UpdateDeviceTypeRequest {
                    is_active: Some(false),
                    ..UpdateDeviceTypeRequest::default()
                };
                self.client.update_device_type(&device.id, &req).await?;

                let brands: Vec<Arc<Brand>> = self
                    .store
                    .brands_snapshot()
                    .iter()
                    .filter(|b| b.category_slug == device.slug)
                    .cloned()
                    .collect();
                let categories: Vec<Arc<PartCategory>> = self
                    .store
                    .part_categories_snapshot()
                    .iter()
                    .filter(|c| c.device_id == device.id)
                    .cloned()
                    .collect();

                let brand_updates = brands.iter().map(|brand| {
                    let req = disabled_brand_update(brand);
                    async move { self.client.update_brand(&brand.id, &req).await }
                });
                let category_disables = categories
                    .iter()
                    .map(|category| self.client.disable_part_category(&category.id));

                let (brand_results, category_results) =
                    tokio::join!(join_all(brand_updates), join_all(category_disables));
                for result in brand_results {
                    result?;
                }
                for result in category_results {
                    result?;
                }
            }
            DisableTarget::Brand { id } => {
                let brand = self
                    .brand_by_id(id)
                    .ok_or_else(|| CoreError::validation("Brand no longer exists"))?;
                self.client
                    .update_brand(&brand.id, &disabled_brand_update(&brand))
                    .await?;
            }
            DisableTarget::Model(mref) => {
                // Re-read from the freshest snapshot — the index may
                // have been retargeted by a concurrent length change.
                let brand = self
                    .brand_by_id(&mref.brand_id)
                    .ok_or_else(|| CoreError::validation("Model no longer exists"))?;
                let mut updated = (*brand).clone();
                let Some(entry) = updated.models.get_mut(mref.index) else {
                    return Err(CoreError::validation("Model no longer exists"));
                };
                entry.is_active = Some(false);
                self.client
                    .update_brand(&brand.id, &full_brand_update(&updated))
                    .await?;
            }
            DisableTarget::PartCategory { id } => {
                self.client.disable_part_category(id).await?;
            }
        }
        Ok(())
    }

    // ── Lookup helpers ───────────────────────────────────────────────

    fn device_by_id(&self, id: &str) -> Option<Arc<DeviceType>> {
        self.store
            .device_types_snapshot()
            .iter()
            .find(|d| d.id == id)
            .cloned()
    }

    fn brand_by_id(&self, id: &str) -> Option<Arc<Brand>> {
        self.store
            .brands_snapshot()
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    fn part_category_by_id(&self, id: &str) -> Option<Arc<PartCategory>> {
        self.store
            .part_categories_snapshot()
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    fn current_active_flag(&self, target: &DisableTarget) -> Option<bool> {
        match target {
            DisableTarget::Device { id } => self.device_by_id(id).map(|d| d.is_active),
            DisableTarget::Brand { id } => self.brand_by_id(id).map(|b| b.is_active),
            DisableTarget::Model(mref) => self
                .brand_by_id(&mref.brand_id)
                .and_then(|b| b.model(mref.index).map(Model::active)),
            DisableTarget::PartCategory { id } => {
                self.part_category_by_id(id).map(|c| c.is_active)
            }
        }
    }

    // ── Feedback plumbing ────────────────────────────────────────────

    /// Every user action starts by clearing the previous inline error.
    fn begin_action(&self) {
        let _ = self.inline_error.send(None);
    }

    /// Raise a validation error: inline message only, no toast, and the
    /// network is never touched.
    fn validation(&self, message: impl Into<String>) -> CoreError {
        let message = message.into();
        let _ = self.inline_error.send(Some(message.clone()));
        CoreError::Validation(message)
    }

    /// Record an already-built validation error in the inline slot.
    fn note_validation(&self, err: CoreError) -> CoreError {
        let _ = self.inline_error.send(Some(err.to_string()));
        err
    }

    /// Surface a transport/server failure: inline message plus a toast.
    fn report_failure(&self, err: &CoreError) {
        let message = err.to_string();
        let _ = self.inline_error.send(Some(message.clone()));
        let _ = self.notices.send(Notice::error(message));
    }

    fn toast_success(&self, message: impl Into<String>) {
        let _ = self.notices.send(Notice::success(message));
    }

    fn required_name(&self, raw: &str, message: &str) -> Result<String, CoreError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(self.validation(message));
        }
        Ok(name.to_owned())
    }

    /// Run an API call, converting and reporting any failure.
    async fn api<T>(
        &self,
        call: impl Future<Output = Result<T, partsbay_api::Error>>,
    ) -> Result<T, CoreError> {
        match call.await {
            Ok(value) => Ok(value),
            Err(e) => {
                let err = CoreError::from(e);
                self.report_failure(&err);
                Err(err)
            }
        }
    }
}

/// Full-brand payload with the brand and every model flagged inactive —
/// the per-brand step of a device or brand cascade.
fn disabled_brand_update(brand: &Brand) -> UpdateBrandRequest {
    let mut req = full_brand_update(brand);
    req.is_active = false;
    for model in &mut req.models {
        model.is_active = Some(false);
    }
    req
}
