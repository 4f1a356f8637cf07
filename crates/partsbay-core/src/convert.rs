// ── Wire ↔ domain conversions ──
//
// API response types never leak past this module; the rest of the crate
// works with the canonical model types. The reverse direction builds the
// full-document payloads the brand endpoint requires.

use partsbay_api::types::{
    BrandResponse, DeviceTypeResponse, GlobalCategoryResponse, ModelEntry, PartCategoryResponse,
    UpdateBrandRequest,
};

use crate::model::{Brand, DeviceType, GlobalCategory, Model, PartCategory};

impl From<DeviceTypeResponse> for DeviceType {
    fn from(r: DeviceTypeResponse) -> Self {
        Self {
            id: r.id,
            name: r.name,
            slug: r.slug,
            icon: r.icon,
            is_active: r.is_active,
            order: r.order,
        }
    }
}

impl From<ModelEntry> for Model {
    fn from(r: ModelEntry) -> Self {
        Self {
            name: r.name,
            model_number: r.model_number,
            release_year: r.release_year,
            is_active: r.is_active,
            slug: r.slug,
        }
    }
}

impl From<&Model> for ModelEntry {
    fn from(m: &Model) -> Self {
        Self {
            name: m.name.clone(),
            model_number: m.model_number.clone(),
            release_year: m.release_year,
            is_active: m.is_active,
            slug: m.slug.clone(),
        }
    }
}

impl From<BrandResponse> for Brand {
    fn from(r: BrandResponse) -> Self {
        Self {
            id: r.id,
            category_slug: r.category_slug,
            name: r.name,
            slug: r.slug,
            models: r.models.into_iter().map(Model::from).collect(),
            is_active: r.is_active,
        }
    }
}

impl From<PartCategoryResponse> for PartCategory {
    fn from(r: PartCategoryResponse) -> Self {
        Self {
            id: r.id,
            device_id: r.device_id,
            name: r.name,
            slug: r.slug,
            icon: r.icon,
            is_active: r.is_active,
        }
    }
}

impl From<GlobalCategoryResponse> for GlobalCategory {
    fn from(r: GlobalCategoryResponse) -> Self {
        Self {
            id: r.id,
            name: r.name,
            icon: r.icon,
            slug: r.slug,
            is_active: r.is_active,
            order: r.order,
        }
    }
}

/// Full-document brand payload mirroring the brand as-is.
///
/// The brand endpoint has replace semantics, so every brand mutation —
/// rename, model append, single-model flag flip — starts from this and
/// edits the relevant field.
pub(crate) fn full_brand_update(brand: &Brand) -> UpdateBrandRequest {
    UpdateBrandRequest {
        category_slug: brand.category_slug.clone(),
        name: brand.name.clone(),
        slug: brand.slug.clone(),
        models: brand.models.iter().map(ModelEntry::from).collect(),
        is_active: brand.is_active,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn full_brand_update_round_trips_models() {
        let brand = Brand {
            id: "b1".into(),
            category_slug: "mobile".into(),
            name: "Apple".into(),
            slug: "apple".into(),
            models: vec![Model {
                name: "iPhone 15".into(),
                model_number: Some("A3090".into()),
                release_year: Some(2023),
                is_active: Some(true),
                slug: Some("iphone-15".into()),
            }],
            is_active: true,
        };

        let req = full_brand_update(&brand);
        assert_eq!(req.category_slug, "mobile");
        assert_eq!(req.models.len(), 1);
        assert_eq!(req.models[0].name, "iPhone 15");
        assert_eq!(req.models[0].model_number.as_deref(), Some("A3090"));
        assert_eq!(req.models[0].release_year, Some(2023));
    }
}
