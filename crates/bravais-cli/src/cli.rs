use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Bravais Lattice Explorer Contributors",
    version,
    about = "Bravais CLI - Explore the 14 Bravais lattices: inspect lattice types, edit parameters under their symmetry constraints, and generate unit-cell geometry.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every lattice type in the catalog, grouped by crystal system.
    List(ListArgs),
    /// Show the defaults, constraints and atom positions of one lattice type.
    Show(ShowArgs),
    /// Generate basis vectors, atoms and the cell outline for a lattice.
    Generate(GenerateArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Use a custom lattice catalog (TOML) instead of the builtin one.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Lattice type id (e.g. 'face-centered-cubic').
    #[arg(required = true, value_name = "ID")]
    pub id: String,

    /// Use a custom lattice catalog (TOML) instead of the builtin one.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    // --- Inputs ---
    /// Path to a generation configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use a custom lattice catalog (TOML) instead of the builtin one.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    // --- Overrides ---
    /// Lattice type id, overriding `lattice.type` from the config file.
    #[arg(short, long, value_name = "ID")]
    pub lattice: Option<String>,

    /// Number of unit cells along each axis, overriding `generation.repeats`.
    #[arg(short = 'n', long, value_name = "INT", allow_negative_numbers = true)]
    pub repeats: Option<i64>,

    /// Edit a lattice parameter after the defaults are loaded.
    /// Can be used multiple times; edits are applied in order. Example: -p a=2.5
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S generation.repeats=3
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,

    // --- Output ---
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}
