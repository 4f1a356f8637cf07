// ── Device types and part categories ──
//
// The two sides of the taxonomy that hang off a device: brands (see
// brand.rs) reference a device type by slug, part categories by id.
// The asymmetry is inherited from the backend and preserved on purpose.

use serde::{Deserialize, Serialize};

/// Top-level hardware category (e.g. mobile, laptop).
///
/// Root of one hierarchy branch. `order` determines display sequence;
/// ties are broken by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceType {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub icon: Option<String>,
    pub is_active: bool,
    pub order: i64,
}

/// Classification of replacement parts (e.g. screen, battery), scoped to
/// one device type by **id**.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartCategory {
    pub id: String,
    pub device_id: String,
    pub name: String,
    pub slug: String,
    pub icon: Option<String>,
    pub is_active: bool,
}

/// Catalog-wide category template, usable as a one-click quick-add for a
/// device's part categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalCategory {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub slug: String,
    pub is_active: bool,
    pub order: i64,
}
