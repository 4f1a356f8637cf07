//! Shared helpers for command handlers.

use std::sync::Arc;

use partsbay_core::{Brand, Catalog, DeviceType, DisableTarget, GlobalCategory, PartCategory};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Resolve a device type by id, slug, or (case-insensitive) name.
pub fn resolve_device(catalog: &Catalog, identifier: &str) -> Result<Arc<DeviceType>, CliError> {
    let snap = catalog.store().device_types_snapshot();
    snap.iter()
        .find(|d| {
            d.id == identifier || d.slug == identifier || d.name.eq_ignore_ascii_case(identifier)
        })
        .cloned()
        .ok_or_else(|| CliError::NotFound {
            resource_type: "device type".into(),
            identifier: identifier.into(),
            list_command: "devices list".into(),
        })
}

/// Resolve a brand by id, slug, or (case-insensitive) name.
pub fn resolve_brand(catalog: &Catalog, identifier: &str) -> Result<Arc<Brand>, CliError> {
    let snap = catalog.store().brands_snapshot();
    snap.iter()
        .find(|b| {
            b.id == identifier || b.slug == identifier || b.name.eq_ignore_ascii_case(identifier)
        })
        .cloned()
        .ok_or_else(|| CliError::NotFound {
            resource_type: "brand".into(),
            identifier: identifier.into(),
            list_command: "brands list".into(),
        })
}

/// Resolve a part category by id, slug, or (case-insensitive) name.
pub fn resolve_category(catalog: &Catalog, identifier: &str) -> Result<Arc<PartCategory>, CliError> {
    let snap = catalog.store().part_categories_snapshot();
    snap.iter()
        .find(|c| {
            c.id == identifier || c.slug == identifier || c.name.eq_ignore_ascii_case(identifier)
        })
        .cloned()
        .ok_or_else(|| CliError::NotFound {
            resource_type: "part category".into(),
            identifier: identifier.into(),
            list_command: "parts list".into(),
        })
}

/// Resolve a global category template by id, slug, or name.
pub fn resolve_template(catalog: &Catalog, identifier: &str) -> Result<Arc<GlobalCategory>, CliError> {
    let snap = catalog.store().global_categories_snapshot();
    snap.iter()
        .find(|t| {
            t.id == identifier || t.slug == identifier || t.name.eq_ignore_ascii_case(identifier)
        })
        .cloned()
        .ok_or_else(|| CliError::NotFound {
            resource_type: "template".into(),
            identifier: identifier.into(),
            list_command: "templates list".into(),
        })
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))
}

/// Run the two-phase disable flow: stage, prompt, then confirm or
/// cancel. A declined prompt restores the staged state and prints the
/// entity's true flag so nothing is left half-toggled.
pub async fn run_disable_flow(
    catalog: &Catalog,
    target: DisableTarget,
    summary: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    catalog.request_disable(target)?;

    if !confirm(summary, global.yes)? {
        let still_active = catalog.cancel_disable().unwrap_or(true);
        if !global.quiet {
            println!(
                "Cancelled — entity remains {}.",
                if still_active { "active" } else { "inactive" }
            );
        }
        return Ok(());
    }

    catalog.confirm_disable().await?;
    if !global.quiet {
        println!("Disabled.");
    }
    Ok(())
}

/// Yes/no cell for table rows.
pub fn active_cell(is_active: bool) -> &'static str {
    if is_active { "yes" } else { "no" }
}
