//! Global category template handlers (read-only).

use std::sync::Arc;

use tabled::Tabled;

use partsbay_core::{Catalog, GlobalCategory};

use crate::cli::{GlobalOpts, TemplatesArgs, TemplatesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct TemplateRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Icon")]
    icon: String,
    #[tabled(rename = "Order")]
    order: i64,
    #[tabled(rename = "ID")]
    id: String,
}

impl From<&Arc<GlobalCategory>> for TemplateRow {
    fn from(t: &Arc<GlobalCategory>) -> Self {
        Self {
            name: t.name.clone(),
            slug: t.slug.clone(),
            icon: t.icon.clone().unwrap_or_default(),
            order: t.order,
            id: t.id.clone(),
        }
    }
}

pub fn handle(
    args: &TemplatesArgs,
    catalog: &Catalog,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match &args.command {
        TemplatesCommand::List { device } => {
            let templates: Vec<Arc<GlobalCategory>> = match device.as_deref() {
                // Scoped: only templates not already present for the device.
                Some(identifier) => {
                    let device = util::resolve_device(catalog, identifier)?;
                    catalog.available_templates(&device.id)
                }
                None => {
                    let snap = catalog.store().global_categories_snapshot();
                    let mut all: Vec<Arc<GlobalCategory>> = snap.iter().cloned().collect();
                    all.sort_by(|a, b| {
                        a.order
                            .cmp(&b.order)
                            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                    });
                    all
                }
            };

            let rendered = output::render_list(
                &global.output,
                &templates,
                |t| TemplateRow::from(t),
                |t| t.id.clone(),
            );
            output::print_output(&rendered, global.quiet);
            Ok(())
        }
    }
}
