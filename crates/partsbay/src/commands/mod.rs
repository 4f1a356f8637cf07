//! Command handlers, one module per resource.

pub mod brands;
pub mod config_cmd;
pub mod devices;
pub mod models;
pub mod parts;
pub mod templates;
pub mod tree;
pub mod util;

use partsbay_core::Catalog;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Route a parsed command to its handler. `Config` and `Completions`
/// are handled in `main` before a catalog exists.
pub async fn dispatch(cmd: Command, catalog: &Catalog, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Tree(args) => tree::handle(&args, catalog, global),
        Command::Devices(args) => devices::handle(args, catalog, global).await,
        Command::Brands(args) => brands::handle(args, catalog, global).await,
        Command::Models(args) => models::handle(args, catalog, global).await,
        Command::Parts(args) => parts::handle(args, catalog, global).await,
        Command::Templates(args) => templates::handle(&args, catalog, global),
        Command::Config(_) | Command::Completions(_) => {
            unreachable!("handled before dispatch")
        }
    }
}
