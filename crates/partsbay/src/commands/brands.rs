//! Brand command handlers.

use std::sync::Arc;

use tabled::Tabled;

use partsbay_core::{Brand, Catalog, DisableTarget};

use crate::cli::{BrandsArgs, BrandsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BrandRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Device")]
    device: String,
    #[tabled(rename = "Models")]
    models: usize,
    #[tabled(rename = "Active")]
    active: &'static str,
    #[tabled(rename = "ID")]
    id: String,
}

impl From<&Arc<Brand>> for BrandRow {
    fn from(b: &Arc<Brand>) -> Self {
        Self {
            name: b.name.clone(),
            slug: b.slug.clone(),
            device: b.category_slug.clone(),
            models: b.models.len(),
            active: util::active_cell(b.is_active),
            id: b.id.clone(),
        }
    }
}

pub async fn handle(
    args: BrandsArgs,
    catalog: &Catalog,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        BrandsCommand::List { device } => {
            let scope = device
                .as_deref()
                .map(|identifier| util::resolve_device(catalog, identifier))
                .transpose()?;

            let snap = catalog.store().brands_snapshot();
            let mut brands: Vec<Arc<Brand>> = snap
                .iter()
                .filter(|b| {
                    scope
                        .as_ref()
                        .is_none_or(|device| b.category_slug == device.slug)
                })
                .cloned()
                .collect();
            brands.sort_by_key(|b| b.name.to_lowercase());

            let rendered =
                output::render_list(&global.output, &brands, |b| BrandRow::from(b), |b| b.id.clone());
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        BrandsCommand::Add { device, name } => {
            let device = util::resolve_device(catalog, &device)?;
            let created = catalog.add_brand(&device.id, &name).await?;
            if !global.quiet {
                println!(
                    "Added brand '{}' (slug: {}) under {}",
                    created.name, created.slug, device.name
                );
            }
            Ok(())
        }

        BrandsCommand::Rename { brand, new_name } => {
            let brand = util::resolve_brand(catalog, &brand)?;
            catalog.rename_brand(&brand.id, &new_name).await?;
            if !global.quiet {
                println!("Renamed '{}' to '{new_name}'", brand.name);
            }
            Ok(())
        }

        BrandsCommand::Disable { brand } => {
            let brand = util::resolve_brand(catalog, &brand)?;
            let summary = format!(
                "Disable brand '{}' and all {} of its models",
                brand.name,
                brand.models.len()
            );
            util::run_disable_flow(
                catalog,
                DisableTarget::Brand {
                    id: brand.id.clone(),
                },
                &summary,
                global,
            )
            .await
        }

        BrandsCommand::Delete { brand } => {
            let brand = util::resolve_brand(catalog, &brand)?;
            let prompt = format!(
                "Permanently delete brand '{}' and its {} model(s)",
                brand.name,
                brand.models.len()
            );
            if !util::confirm(&prompt, global.yes)? {
                return Ok(());
            }
            catalog.delete_brand(&brand.id).await?;
            if !global.quiet {
                println!("Deleted '{}'", brand.name);
            }
            Ok(())
        }
    }
}
