//! Clap derive structures for the `partsbay` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// partsbay -- admin console for the PartsBay device catalog
#[derive(Debug, Parser)]
#[command(
    name = "partsbay",
    version,
    about = "Manage the PartsBay device hierarchy from the command line",
    long_about = "Administer the spare-parts catalog taxonomy: device types,\n\
        brands with their model lists, part categories, and the global\n\
        category templates — the same tree the web admin console manages.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "PARTSBAY_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend base URL (overrides profile)
    #[arg(long, short = 's', env = "PARTSBAY_SERVER", global = true)]
    pub server: Option<String>,

    /// Admin token
    #[arg(long, env = "PARTSBAY_TOKEN", global = true, hide_env = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "PARTSBAY_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "PARTSBAY_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the assembled device hierarchy
    #[command(alias = "t")]
    Tree(TreeArgs),

    /// Manage device types
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// Manage brands under a device type
    #[command(alias = "b")]
    Brands(BrandsArgs),

    /// Manage a brand's model list
    #[command(alias = "m")]
    Models(ModelsArgs),

    /// Manage part categories under a device type
    #[command(alias = "pc")]
    Parts(PartsArgs),

    /// Browse global category templates
    Templates(TemplatesArgs),

    /// Manage configuration profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Tree ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Filter the tree by a name/slug substring
    #[arg(long, short = 'f')]
    pub search: Option<String>,
}

// ── Devices ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommand {
    /// List device types
    #[command(alias = "ls")]
    List,

    /// Add a device type (slug, icon, and order are derived)
    Add {
        /// Display name
        name: String,
    },

    /// Rename a device type
    Rename {
        /// Device id, slug, or name
        device: String,
        /// New display name
        new_name: String,
    },

    /// Disable a device type and everything under it (with confirmation)
    Disable {
        /// Device id, slug, or name
        device: String,
    },

    /// Re-enable a device type
    Enable {
        /// Device id, slug, or name
        device: String,
    },

    /// Delete a device type
    #[command(alias = "rm")]
    Delete {
        /// Device id, slug, or name
        device: String,
    },
}

// ── Brands ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BrandsArgs {
    #[command(subcommand)]
    pub command: BrandsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BrandsCommand {
    /// List brands, optionally scoped to a device type
    #[command(alias = "ls")]
    List {
        /// Device id, slug, or name
        #[arg(long, short = 'd')]
        device: Option<String>,
    },

    /// Add a brand under a device type
    Add {
        /// Owning device id, slug, or name
        device: String,
        /// Brand display name
        name: String,
    },

    /// Rename a brand
    Rename {
        /// Brand id, slug, or name
        brand: String,
        /// New display name
        new_name: String,
    },

    /// Disable a brand and all its models (with confirmation)
    Disable {
        /// Brand id, slug, or name
        brand: String,
    },

    /// Delete a brand
    #[command(alias = "rm")]
    Delete {
        /// Brand id, slug, or name
        brand: String,
    },
}

// ── Models ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ModelsArgs {
    #[command(subcommand)]
    pub command: ModelsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ModelsCommand {
    /// List a brand's models in array order
    #[command(alias = "ls")]
    List {
        /// Brand id, slug, or name
        brand: String,
    },

    /// Append a model to a brand
    Add {
        /// Brand id, slug, or name
        brand: String,
        /// Model display name
        name: String,
        /// Manufacturer model number
        #[arg(long)]
        number: Option<String>,
        /// Release year
        #[arg(long)]
        year: Option<u16>,
    },

    /// Rename a model (addressed by its position)
    Rename {
        /// Brand id, slug, or name
        brand: String,
        /// Zero-based position in the model list
        index: usize,
        /// New display name
        new_name: String,
    },

    /// Disable a single model (with confirmation)
    Disable {
        /// Brand id, slug, or name
        brand: String,
        /// Zero-based position in the model list
        index: usize,
    },
}

// ── Part categories ──────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PartsArgs {
    #[command(subcommand)]
    pub command: PartsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PartsCommand {
    /// List part categories, optionally scoped to a device type
    #[command(alias = "ls")]
    List {
        /// Device id, slug, or name
        #[arg(long, short = 'd')]
        device: Option<String>,
    },

    /// Add a part category under a device type
    Add {
        /// Owning device id, slug, or name
        device: String,
        /// Category display name
        name: String,
        /// Icon name
        #[arg(long)]
        icon: Option<String>,
    },

    /// Add a part category from a global template
    FromTemplate {
        /// Owning device id, slug, or name
        device: String,
        /// Template id, slug, or name
        template: String,
    },

    /// Rename a part category
    Rename {
        /// Category id, slug, or name
        category: String,
        /// New display name
        new_name: String,
    },

    /// Disable a part category (with confirmation)
    Disable {
        /// Category id, slug, or name
        category: String,
    },
}

// ── Templates ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    #[command(subcommand)]
    pub command: TemplatesCommand,
}

#[derive(Debug, Subcommand)]
pub enum TemplatesCommand {
    /// List global category templates
    #[command(alias = "ls")]
    List {
        /// Only templates still available for this device
        #[arg(long, short = 'd')]
        device: Option<String>,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create a starter config file
    Init {
        /// Backend base URL for the default profile
        #[arg(long)]
        server: Option<String>,
    },

    /// Print the resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// Store the admin token in the system keyring
    SetToken {
        /// Profile to store the token for
        #[arg(long, default_value = "default")]
        profile: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
