//! Part-category command handlers.

use std::sync::Arc;

use tabled::Tabled;

use partsbay_core::{Catalog, DisableTarget, PartCategory};

use crate::cli::{GlobalOpts, PartsArgs, PartsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Device")]
    device: String,
    #[tabled(rename = "Icon")]
    icon: String,
    #[tabled(rename = "Active")]
    active: &'static str,
    #[tabled(rename = "ID")]
    id: String,
}

impl From<&Arc<PartCategory>> for CategoryRow {
    fn from(c: &Arc<PartCategory>) -> Self {
        Self {
            name: c.name.clone(),
            slug: c.slug.clone(),
            device: c.device_id.clone(),
            icon: c.icon.clone().unwrap_or_default(),
            active: util::active_cell(c.is_active),
            id: c.id.clone(),
        }
    }
}

pub async fn handle(
    args: PartsArgs,
    catalog: &Catalog,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PartsCommand::List { device } => {
            let scope = device
                .as_deref()
                .map(|identifier| util::resolve_device(catalog, identifier))
                .transpose()?;

            let snap = catalog.store().part_categories_snapshot();
            let mut categories: Vec<Arc<PartCategory>> = snap
                .iter()
                .filter(|c| {
                    scope
                        .as_ref()
                        .is_none_or(|device| c.device_id == device.id)
                })
                .cloned()
                .collect();
            categories.sort_by_key(|c| c.name.to_lowercase());

            let rendered = output::render_list(
                &global.output,
                &categories,
                |c| CategoryRow::from(c),
                |c| c.id.clone(),
            );
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        PartsCommand::Add { device, name, icon } => {
            let device = util::resolve_device(catalog, &device)?;
            let created = catalog
                .add_part_category(&device.id, &name, icon.as_deref())
                .await?;
            if !global.quiet {
                println!(
                    "Added category '{}' (slug: {}) under {}",
                    created.name, created.slug, device.name
                );
            }
            Ok(())
        }

        PartsCommand::FromTemplate { device, template } => {
            let device = util::resolve_device(catalog, &device)?;
            let template = util::resolve_template(catalog, &template)?;
            let created = catalog
                .add_part_category_from_template(&device.id, &template)
                .await?;
            if !global.quiet {
                println!(
                    "Added category '{}' under {} from template",
                    created.name, device.name
                );
            }
            Ok(())
        }

        PartsCommand::Rename { category, new_name } => {
            let category = util::resolve_category(catalog, &category)?;
            catalog.rename_part_category(&category.id, &new_name).await?;
            if !global.quiet {
                println!("Renamed '{}' to '{new_name}'", category.name);
            }
            Ok(())
        }

        PartsCommand::Disable { category } => {
            let category = util::resolve_category(catalog, &category)?;
            let summary = format!("Disable part category '{}'", category.name);
            util::run_disable_flow(
                catalog,
                DisableTarget::PartCategory {
                    id: category.id.clone(),
                },
                &summary,
                global,
            )
            .await
        }
    }
}
