// ── Brands and their position-addressed models ──

use std::fmt;

use serde::{Deserialize, Serialize};

/// A manufacturer, scoped to exactly one device type via a denormalized
/// **slug** reference (`category_slug`).
///
/// A brand whose `category_slug` matches no device type is an orphan: it
/// is omitted from the assembled tree but never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub category_slug: String,
    pub name: String,
    pub slug: String,
    pub models: Vec<Model>,
    pub is_active: bool,
}

impl Brand {
    /// The model at `index`, if the array still has one there.
    pub fn model(&self, index: usize) -> Option<&Model> {
        self.models.get(index)
    }
}

/// One product variant in a brand's `models` array.
///
/// Not an independent entity — its identity is its position in the
/// array plus the owning brand's id. Every mutation of a model rewrites
/// the whole array through a full-brand update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub model_number: Option<String>,
    pub release_year: Option<u16>,
    /// Absent means active — the backend only materializes the flag once
    /// a model has been disabled at least once.
    pub is_active: Option<bool>,
    pub slug: Option<String>,
}

impl Model {
    /// Effective active flag (absent counts as active).
    pub fn active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }
}

/// Position-based address of a model: owning brand id + array index.
///
/// The backing store has no per-model id, so this value type is the only
/// way to re-locate a model. A concurrent edit that changes the array
/// length while a `ModelRef` is held can retarget it — callers re-read
/// the brand from the freshest snapshot before acting, and selection
/// revalidation clears refs whose index fell off the end.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelRef {
    pub brand_id: String,
    pub index: usize,
}

impl ModelRef {
    pub fn new(brand_id: impl Into<String>, index: usize) -> Self {
        Self {
            brand_id: brand_id.into(),
            index,
        }
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.brand_id, self.index)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn model(name: &str, is_active: Option<bool>) -> Model {
        Model {
            name: name.into(),
            model_number: None,
            release_year: None,
            is_active,
            slug: None,
        }
    }

    #[test]
    fn absent_active_flag_counts_as_active() {
        assert!(model("iPhone", None).active());
        assert!(model("iPhone", Some(true)).active());
        assert!(!model("iPhone", Some(false)).active());
    }

    #[test]
    fn model_lookup_by_index() {
        let brand = Brand {
            id: "b1".into(),
            category_slug: "mobile".into(),
            name: "Apple".into(),
            slug: "apple".into(),
            models: vec![model("iPhone 15", None), model("iPhone 14", None)],
            is_active: true,
        };
        assert_eq!(brand.model(1).unwrap().name, "iPhone 14");
        assert!(brand.model(2).is_none());
    }

    #[test]
    fn model_ref_display() {
        assert_eq!(ModelRef::new("b1", 3).to_string(), "b1#3");
    }
}
