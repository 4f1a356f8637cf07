//! Hierarchy tree assembly and search filtering.
//!
//! [`assemble`] is a pure function from the three flat collections to an
//! ordered forest of [`HierarchyNode`]s. It is rebuilt from scratch on
//! every recomputation — nodes are never mutated in place, so no dangling
//! node reference survives a reload. Equal inputs always yield
//! structurally equal trees (ids are derived, not random), which is what
//! makes re-selection after a refresh safe.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::model::{Brand, DeviceType, PartCategory};

// ── Node identity ───────────────────────────────────────────────────

/// What a hierarchy node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Device,
    Brand,
    Model,
    PartsRoot,
    PartCategory,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Device => "device",
            Self::Brand => "brand",
            Self::Model => "model",
            Self::PartsRoot => "parts-root",
            Self::PartCategory => "part-category",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived node ids. Deterministic functions of entity identity, so the
/// same entities always produce the same node ids across rebuilds.
pub fn device_node_id(device_id: &str) -> String {
    format!("device:{device_id}")
}

pub fn brand_node_id(brand_id: &str) -> String {
    format!("brand:{brand_id}")
}

/// Models have no id of their own — the node id encodes owner + position.
pub fn model_node_id(brand_id: &str, index: usize) -> String {
    format!("model:{brand_id}:{index}")
}

/// One synthetic parts-root per device.
pub fn parts_root_node_id(device_id: &str) -> String {
    format!("parts:{device_id}")
}

pub fn category_node_id(category_id: &str) -> String {
    format!("cat:{category_id}")
}

// ── HierarchyNode ───────────────────────────────────────────────────

/// A node of the assembled device hierarchy.
///
/// Derived, never persisted. `device_id` / `brand_id` / `model_index`
/// carry whatever identity is needed to re-locate the backing entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyNode {
    pub id: String,
    pub kind: NodeKind,
    pub name: String,
    pub slug: String,
    pub icon: Option<String>,
    pub is_active: bool,
    pub parent_id: Option<String>,
    pub device_id: Option<String>,
    pub brand_id: Option<String>,
    pub model_index: Option<usize>,
    pub children: Vec<HierarchyNode>,
}

// ── Assembly ────────────────────────────────────────────────────────

/// Assemble the hierarchy forest from the three flat collections.
///
/// - Devices are sorted by `(order, name)`.
/// - Brands join their device by `category_slug == device.slug`; brands
///   with no matching device are orphans and simply do not appear.
/// - Part categories join by `device_id == device.id` and sit under one
///   synthetic parts-root per device, after all brand children.
/// - Models keep their source array order: position encodes identity, so
///   sorting them would corrupt every index-based lookup downstream.
///
/// Missing or stale references never fail assembly.
pub fn assemble(
    device_types: &[Arc<DeviceType>],
    brands: &[Arc<Brand>],
    part_categories: &[Arc<PartCategory>],
) -> Vec<HierarchyNode> {
    let mut brands_by_slug: HashMap<&str, Vec<&Arc<Brand>>> = HashMap::new();
    for brand in brands {
        brands_by_slug
            .entry(brand.category_slug.as_str())
            .or_default()
            .push(brand);
    }

    let mut categories_by_device: HashMap<&str, Vec<&Arc<PartCategory>>> = HashMap::new();
    for category in part_categories {
        categories_by_device
            .entry(category.device_id.as_str())
            .or_default()
            .push(category);
    }

    let mut devices: Vec<&Arc<DeviceType>> = device_types.iter().collect();
    devices.sort_by(|a, b| {
        a.order
            .cmp(&b.order)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    devices
        .into_iter()
        .map(|device| {
            let device_id = device_node_id(&device.id);

            let mut device_brands = brands_by_slug
                .get(device.slug.as_str())
                .cloned()
                .unwrap_or_default();
            device_brands.sort_by_key(|b| b.name.to_lowercase());

            let mut children: Vec<HierarchyNode> = device_brands
                .into_iter()
                .map(|brand| brand_node(brand, &device_id, &device.id))
                .collect();

            let mut device_categories = categories_by_device
                .get(device.id.as_str())
                .cloned()
                .unwrap_or_default();
            device_categories.sort_by_key(|c| c.name.to_lowercase());

            // Brands always precede the single parts-root child.
            children.push(parts_root_node(device, &device_categories, &device_id));

            HierarchyNode {
                id: device_id,
                kind: NodeKind::Device,
                name: device.name.clone(),
                slug: device.slug.clone(),
                icon: device.icon.clone(),
                is_active: device.is_active,
                parent_id: None,
                device_id: Some(device.id.clone()),
                brand_id: None,
                model_index: None,
                children,
            }
        })
        .collect()
}

fn brand_node(brand: &Brand, parent_id: &str, owning_device_id: &str) -> HierarchyNode {
    let node_id = brand_node_id(&brand.id);

    let children = brand
        .models
        .iter()
        .enumerate()
        .map(|(index, model)| HierarchyNode {
            id: model_node_id(&brand.id, index),
            kind: NodeKind::Model,
            name: model.name.clone(),
            slug: model.slug.clone().unwrap_or_default(),
            icon: None,
            is_active: model.active(),
            parent_id: Some(node_id.clone()),
            device_id: Some(owning_device_id.to_owned()),
            brand_id: Some(brand.id.clone()),
            model_index: Some(index),
            children: Vec::new(),
        })
        .collect();

    HierarchyNode {
        id: node_id,
        kind: NodeKind::Brand,
        name: brand.name.clone(),
        slug: brand.slug.clone(),
        icon: None,
        is_active: brand.is_active,
        parent_id: Some(parent_id.to_owned()),
        device_id: Some(owning_device_id.to_owned()),
        brand_id: Some(brand.id.clone()),
        model_index: None,
        children,
    }
}

fn parts_root_node(
    device: &DeviceType,
    categories: &[&Arc<PartCategory>],
    parent_id: &str,
) -> HierarchyNode {
    let node_id = parts_root_node_id(&device.id);

    let children = categories
        .iter()
        .map(|category| HierarchyNode {
            id: category_node_id(&category.id),
            kind: NodeKind::PartCategory,
            name: category.name.clone(),
            slug: category.slug.clone(),
            icon: category.icon.clone(),
            is_active: category.is_active,
            parent_id: Some(node_id.clone()),
            device_id: Some(device.id.clone()),
            brand_id: None,
            model_index: None,
            children: Vec::new(),
        })
        .collect();

    HierarchyNode {
        id: node_id,
        kind: NodeKind::PartsRoot,
        // Display name embeds the live count.
        name: format!("Part Categories ({})", categories.len()),
        slug: "parts".into(),
        icon: None,
        is_active: true,
        parent_id: Some(parent_id.to_owned()),
        device_id: Some(device.id.clone()),
        brand_id: None,
        model_index: None,
        children,
    }
}

// ── Search filtering ────────────────────────────────────────────────

/// Filter the forest by a case-insensitive substring over name-or-slug.
///
/// A node survives if it matches directly or if any descendant matches.
/// Returns the pruned forest plus the ids of every surviving node — the
/// caller force-expands those so results are never hidden behind a
/// collapsed toggle. An empty query returns the forest unchanged with an
/// empty expansion set.
pub fn filter(nodes: &[HierarchyNode], query: &str) -> (Vec<HierarchyNode>, HashSet<String>) {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return (nodes.to_vec(), HashSet::new());
    }

    let mut surviving = HashSet::new();
    let filtered = nodes
        .iter()
        .filter_map(|node| filter_node(node, &query, &mut surviving))
        .collect();
    (filtered, surviving)
}

fn filter_node(
    node: &HierarchyNode,
    query: &str,
    surviving: &mut HashSet<String>,
) -> Option<HierarchyNode> {
    let children: Vec<HierarchyNode> = node
        .children
        .iter()
        .filter_map(|child| filter_node(child, query, surviving))
        .collect();

    let direct_match = node.name.to_lowercase().contains(query)
        || node.slug.to_lowercase().contains(query);

    if !direct_match && children.is_empty() {
        return None;
    }

    surviving.insert(node.id.clone());

    // A directly-matched node keeps its full subtree; otherwise only the
    // matching descendants survive.
    let children = if direct_match {
        node.children.clone()
    } else {
        children
    };

    Some(HierarchyNode {
        children,
        ..node.clone()
    })
}

// ── Lookup helpers ──────────────────────────────────────────────────

/// Depth-first lookup by node id.
pub fn find<'a>(nodes: &'a [HierarchyNode], id: &str) -> Option<&'a HierarchyNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Ids of every ancestor of `id`, root first. Empty if the node is a
/// root or absent.
pub fn ancestor_ids(nodes: &[HierarchyNode], id: &str) -> Vec<String> {
    let mut path = Vec::new();
    if walk_ancestors(nodes, id, &mut path) {
        path
    } else {
        Vec::new()
    }
}

fn walk_ancestors(nodes: &[HierarchyNode], id: &str, path: &mut Vec<String>) -> bool {
    for node in nodes {
        if node.id == id {
            return true;
        }
        path.push(node.id.clone());
        if walk_ancestors(&node.children, id, path) {
            return true;
        }
        path.pop();
    }
    false
}
