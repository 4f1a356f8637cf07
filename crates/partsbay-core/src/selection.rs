//! Selection and expansion state over the assembled hierarchy.
//!
//! Single-selection model: picking a node replaces the selection
//! wholesale and force-expands its ancestors so a selection can never
//! hide its own target. Selections carry re-location identity, not node
//! references — after every refresh the state is revalidated against the
//! freshest snapshots and silently cleared if the backing entity is gone.

use std::collections::HashSet;

use crate::model::ModelRef;
use crate::store::CatalogStore;
use crate::tree::{self, HierarchyNode, NodeKind};

// ── SelectedNode ────────────────────────────────────────────────────

/// The minimal identity needed to re-locate a selected entity.
///
/// Models have no independent id, so their variant is a
/// [`ModelRef`] (owning brand + array position).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedNode {
    Device { id: String },
    Brand { id: String },
    Model(ModelRef),
    PartsRoot { device_id: String },
    PartCategory { id: String },
}

impl SelectedNode {
    /// The derived tree-node id this selection corresponds to.
    pub fn node_id(&self) -> String {
        match self {
            Self::Device { id } => tree::device_node_id(id),
            Self::Brand { id } => tree::brand_node_id(id),
            Self::Model(mref) => tree::model_node_id(&mref.brand_id, mref.index),
            Self::PartsRoot { device_id } => tree::parts_root_node_id(device_id),
            Self::PartCategory { id } => tree::category_node_id(id),
        }
    }

    /// Build a selection from an assembled node, extracting the backing
    /// entity's identity.
    pub fn from_node(node: &HierarchyNode) -> Option<Self> {
        match node.kind {
            NodeKind::Device => node.device_id.clone().map(|id| Self::Device { id }),
            NodeKind::Brand => node.brand_id.clone().map(|id| Self::Brand { id }),
            NodeKind::Model => match (&node.brand_id, node.model_index) {
                (Some(brand_id), Some(index)) => {
                    Some(Self::Model(ModelRef::new(brand_id.clone(), index)))
                }
                _ => None,
            },
            NodeKind::PartsRoot => node
                .device_id
                .clone()
                .map(|device_id| Self::PartsRoot { device_id }),
            NodeKind::PartCategory => node
                .id
                .strip_prefix("cat:")
                .map(|id| Self::PartCategory { id: id.to_owned() }),
        }
    }
}

// ── SelectionState ──────────────────────────────────────────────────

/// Which node is selected and which node ids are expanded.
#[derive(Debug, Default)]
pub struct SelectionState {
    selected: Option<SelectedNode>,
    expanded: HashSet<String>,
    defaults_applied: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&SelectedNode> {
        self.selected.as_ref()
    }

    pub fn is_expanded(&self, node_id: &str) -> bool {
        self.expanded.contains(node_id)
    }

    pub fn expanded(&self) -> &HashSet<String> {
        &self.expanded
    }

    /// Select a node, replacing any previous selection, and make sure
    /// every ancestor is expanded — selection never hides its target.
    pub fn select(&mut self, forest: &[HierarchyNode], target: SelectedNode) {
        for ancestor in tree::ancestor_ids(forest, &target.node_id()) {
            self.expanded.insert(ancestor);
        }
        self.selected = Some(target);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Toggle a node's expansion.
    pub fn toggle(&mut self, node_id: &str) {
        if !self.expanded.remove(node_id) {
            self.expanded.insert(node_id.to_owned());
        }
    }

    /// Force-expand a set of node ids (used for search survivors).
    pub fn expand_all<I, S>(&mut self, node_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded.extend(node_ids.into_iter().map(Into::into));
    }

    /// Expand every device node and every device's parts-root.
    ///
    /// Applied once per session, on the first successful load — the
    /// guard keeps it from re-triggering after the user collapses nodes.
    pub fn apply_default_expansion(&mut self, forest: &[HierarchyNode]) {
        if self.defaults_applied {
            return;
        }
        for device in forest {
            self.expanded.insert(device.id.clone());
            for child in &device.children {
                if child.kind == NodeKind::PartsRoot {
                    self.expanded.insert(child.id.clone());
                }
            }
        }
        self.defaults_applied = true;
    }

    /// Revalidate the selection against the freshest collections.
    ///
    /// Skipped while any fetch is in flight — an in-progress reload must
    /// not transiently invalidate a selection that is still fine. If the
    /// backing entity disappeared (or a model's index fell off the end of
    /// the array), the selection resets to `None` silently; staleness is
    /// not an error.
    pub fn revalidate(&mut self, store: &CatalogStore) {
        if store.any_loading() {
            return;
        }
        let Some(selected) = &self.selected else {
            return;
        };

        let valid = match selected {
            SelectedNode::Device { id } | SelectedNode::PartsRoot { device_id: id } => store
                .device_types_snapshot()
                .iter()
                .any(|d| d.id == *id),
            SelectedNode::Brand { id } => {
                store.brands_snapshot().iter().any(|b| b.id == *id)
            }
            SelectedNode::Model(mref) => store
                .brands_snapshot()
                .iter()
                .find(|b| b.id == mref.brand_id)
                .is_some_and(|b| mref.index < b.models.len()),
            SelectedNode::PartCategory { id } => store
                .part_categories_snapshot()
                .iter()
                .any(|c| c.id == *id),
        };

        if !valid {
            self.selected = None;
        }
    }
}
