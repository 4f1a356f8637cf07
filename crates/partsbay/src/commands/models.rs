//! Model command handlers.
//!
//! Models are addressed by their zero-based position in the owning
//! brand's list — the list view prints that index and every mutation
//! takes it.

use tabled::Tabled;

use partsbay_core::{Catalog, DisableTarget, Model, ModelRef};

use crate::cli::{GlobalOpts, ModelsArgs, ModelsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ModelRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Active")]
    active: &'static str,
}

fn model_row(index: usize, model: &Model) -> ModelRow {
    ModelRow {
        index,
        name: model.name.clone(),
        number: model.model_number.clone().unwrap_or_default(),
        year: model.release_year.map(|y| y.to_string()).unwrap_or_default(),
        slug: model.slug.clone().unwrap_or_default(),
        active: util::active_cell(model.active()),
    }
}

pub async fn handle(
    args: ModelsArgs,
    catalog: &Catalog,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ModelsCommand::List { brand } => {
            let brand = util::resolve_brand(catalog, &brand)?;

            let indexed: Vec<(usize, Model)> =
                brand.models.iter().cloned().enumerate().collect();
            let rendered = output::render_list(
                &global.output,
                &indexed,
                |(index, model)| model_row(*index, model),
                |(index, _)| index.to_string(),
            );
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        ModelsCommand::Add {
            brand,
            name,
            number,
            year,
        } => {
            let brand = util::resolve_brand(catalog, &brand)?;
            let mref = catalog
                .add_model(&brand.id, &name, number.as_deref(), year)
                .await?;
            if !global.quiet {
                println!("Added model '{name}' at position {} of {}", mref.index, brand.name);
            }
            Ok(())
        }

        ModelsCommand::Rename {
            brand,
            index,
            new_name,
        } => {
            let brand = util::resolve_brand(catalog, &brand)?;
            require_model(&brand.name, brand.model(index), index)?;
            catalog
                .rename_model(&ModelRef::new(brand.id.clone(), index), &new_name)
                .await?;
            if !global.quiet {
                println!("Renamed model [{index}] of {} to '{new_name}'", brand.name);
            }
            Ok(())
        }

        ModelsCommand::Disable { brand, index } => {
            let brand = util::resolve_brand(catalog, &brand)?;
            let model = require_model(&brand.name, brand.model(index), index)?;
            let summary = format!(
                "Disable model [{index}] '{}' of brand '{}'",
                model.name, brand.name
            );
            util::run_disable_flow(
                catalog,
                DisableTarget::Model(ModelRef::new(brand.id.clone(), index)),
                &summary,
                global,
            )
            .await
        }
    }
}

fn require_model<'a>(
    brand_name: &str,
    model: Option<&'a Model>,
    index: usize,
) -> Result<&'a Model, CliError> {
    model.ok_or_else(|| CliError::NotFound {
        resource_type: "model".into(),
        identifier: format!("{brand_name}[{index}]"),
        list_command: format!("models list '{brand_name}'"),
    })
}
