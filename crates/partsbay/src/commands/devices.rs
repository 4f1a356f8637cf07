//! Device-type command handlers.

use std::sync::Arc;

use tabled::Tabled;

use partsbay_core::catalog::{DeviceDraft, EditOutcome};
use partsbay_core::{Catalog, DeviceType, DisableTarget};

use crate::cli::{DevicesArgs, DevicesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Icon")]
    icon: String,
    #[tabled(rename = "Active")]
    active: &'static str,
    #[tabled(rename = "Order")]
    order: i64,
    #[tabled(rename = "ID")]
    id: String,
}

impl From<&Arc<DeviceType>> for DeviceRow {
    fn from(d: &Arc<DeviceType>) -> Self {
        Self {
            name: d.name.clone(),
            slug: d.slug.clone(),
            icon: d.icon.clone().unwrap_or_default(),
            active: util::active_cell(d.is_active),
            order: d.order,
            id: d.id.clone(),
        }
    }
}

pub async fn handle(
    args: DevicesArgs,
    catalog: &Catalog,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DevicesCommand::List => {
            let snap = catalog.store().device_types_snapshot();
            let mut devices: Vec<Arc<DeviceType>> = snap.iter().cloned().collect();
            devices.sort_by(|a, b| {
                a.order
                    .cmp(&b.order)
                    .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            });

            let rendered =
                output::render_list(&global.output, &devices, |d| DeviceRow::from(d), |d| d.id.clone());
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        DevicesCommand::Add { name } => {
            let created = catalog.add_device(&name).await?;
            if !global.quiet {
                println!(
                    "Added device type '{}' (slug: {}, icon: {}, order: {})",
                    created.name,
                    created.slug,
                    created.icon.as_deref().unwrap_or("-"),
                    created.order
                );
            }
            Ok(())
        }

        DevicesCommand::Rename { device, new_name } => {
            let device = util::resolve_device(catalog, &device)?;
            catalog.rename_device(&device.id, &new_name).await?;
            if !global.quiet {
                println!("Renamed '{}' to '{new_name}'", device.name);
            }
            Ok(())
        }

        DevicesCommand::Disable { device } => {
            let device = util::resolve_device(catalog, &device)?;

            // Spell out the blast radius before staging.
            let brands = catalog.store().brands_snapshot();
            let affected_brands: Vec<_> = brands
                .iter()
                .filter(|b| b.category_slug == device.slug)
                .collect();
            let model_count: usize = affected_brands.iter().map(|b| b.models.len()).sum();
            let category_count = catalog
                .store()
                .part_categories_snapshot()
                .iter()
                .filter(|c| c.device_id == device.id)
                .count();

            let summary = format!(
                "Disable device type '{}'? This also disables {} brand(s), {} model(s), and {} part categorie(s)",
                device.name,
                affected_brands.len(),
                model_count,
                category_count,
            );
            util::run_disable_flow(
                catalog,
                DisableTarget::Device {
                    id: device.id.clone(),
                },
                &summary,
                global,
            )
            .await
        }

        DevicesCommand::Enable { device } => {
            let device = util::resolve_device(catalog, &device)?;
            let outcome = catalog
                .save_device_edit(
                    &device.id,
                    &DeviceDraft {
                        name: device.name.clone(),
                        icon: device.icon.clone(),
                        is_active: true,
                    },
                )
                .await?;
            match outcome {
                EditOutcome::Saved(saved) => {
                    if !global.quiet {
                        println!("Device type '{}' is active again", saved.name);
                    }
                    Ok(())
                }
                // Enabling can't stage a disable; nothing else to do.
                EditOutcome::DisableRequested(_) => Ok(()),
            }
        }

        DevicesCommand::Delete { device } => {
            let device = util::resolve_device(catalog, &device)?;
            let prompt = format!(
                "Permanently delete device type '{}'? Brands and categories referencing it become orphans",
                device.name
            );
            if !util::confirm(&prompt, global.yes)? {
                return Ok(());
            }
            catalog.delete_device_type(&device.id).await?;
            if !global.quiet {
                println!("Deleted '{}'", device.name);
            }
            Ok(())
        }
    }
}
