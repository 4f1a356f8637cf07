// Wire types for the catalog admin API.
//
// Response DTOs mirror the backend's JSON shapes (camelCase fields);
// request payloads use `skip_serializing_if` so partial updates only
// send what changed. Brand updates are the exception: the backend has
// full-document replace semantics there, so every field is required.

use serde::{Deserialize, Serialize};

// ── Device types ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceTypeResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeviceTypeRequest {
    pub name: String,
    pub slug: String,
    pub icon: String,
    pub is_active: bool,
    pub order: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceTypeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

// ── Brands ─────────────────────────────────────────────────────────

/// One entry of a brand's `models` array.
///
/// Models are not independent resources — this same shape travels in
/// both directions, and the entry's position in the array is its only
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandResponse {
    pub id: String,
    /// References a device type by **slug**, not id.
    pub category_slug: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub models: Vec<ModelEntry>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandRequest {
    pub category_slug: String,
    pub name: String,
    pub slug: String,
    pub models: Vec<ModelEntry>,
    pub is_active: bool,
}

/// Full-document brand replace. Model-list changes (add/rename/disable a
/// model) have no endpoint of their own and travel through this payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandRequest {
    pub category_slug: String,
    pub name: String,
    pub slug: String,
    pub models: Vec<ModelEntry>,
    pub is_active: bool,
}

// ── Part categories ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartCategoryResponse {
    pub id: String,
    /// References a device type by **id** (unlike brands, which reference
    /// by slug — an inherited asymmetry the backend preserves).
    pub device_id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartCategoryRequest {
    pub device_id: String,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePartCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

// ── Global category templates ──────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalCategoryResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub slug: String,
    pub is_active: bool,
    #[serde(default)]
    pub order: i64,
}

// ── List envelopes ─────────────────────────────────────────────────
//
// Every list endpoint wraps its payload in a single named array.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeviceTypeList {
    #[serde(default)]
    pub device_types: Vec<DeviceTypeResponse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BrandList {
    #[serde(default)]
    pub brands: Vec<BrandResponse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryList<T> {
    #[serde(default = "Vec::new")]
    pub categories: Vec<T>,
}
