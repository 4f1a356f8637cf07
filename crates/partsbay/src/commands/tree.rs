//! Hierarchy tree view.

use partsbay_core::Catalog;

use crate::cli::{GlobalOpts, OutputFormat, TreeArgs};
use crate::error::CliError;
use crate::output;

pub fn handle(args: &TreeArgs, catalog: &Catalog, global: &GlobalOpts) -> Result<(), CliError> {
    let forest = match args.search.as_deref() {
        Some(query) => catalog.search(query).0,
        None => catalog.tree(),
    };

    let rendered = match global.output {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&forest).expect("serialization should not fail")
        }
        OutputFormat::JsonCompact => {
            serde_json::to_string(&forest).expect("serialization should not fail")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&forest).expect("serialization should not fail")
        }
        OutputFormat::Table => {
            output::render_tree(&forest, output::should_color(&global.color))
        }
        OutputFormat::Plain => output::render_tree(&forest, false),
    };

    output::print_output(&rendered, global.quiet);
    Ok(())
}
