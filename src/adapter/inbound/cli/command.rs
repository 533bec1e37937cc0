//! Command-line interface definitions.
//!
//! Defines the CLI structure for mindmatch using `clap`: one command to
//! solve a matching problem, one to inspect the conflicts that would be
//! applied, and a small config group.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Conflict-aware reviewer matching via linear programming
#[derive(Parser, Debug)]
#[command(name = "mindmatch")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Forced color setting, `None` for terminal detection.
    #[must_use]
    pub const fn forced(self) -> Option<bool> {
        match self {
            Self::Auto => None,
            Self::Always => Some(true),
            Self::Never => Some(false),
        }
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assign partners to every entity of an affinity matrix
    Match(MatchArgs),

    /// List the conflict pairs derived from entity exclusion lists
    Conflicts(ConflictsArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `mindmatch config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a documented configuration file.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Config file argument shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for `mindmatch config init`.
#[derive(Args, Debug, Clone)]
pub struct ConfigInitArgs {
    /// Where to write the file
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `mindmatch match`.
#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    /// JSON file with `entities` and an `affinity` matrix
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Partners per entity (overrides config)
    #[arg(long)]
    pub n_match: Option<usize>,

    /// Lowest-affinity entries dropped per row before solving (overrides config)
    #[arg(long)]
    pub n_trim: Option<usize>,

    /// Solve the integral problem instead of the LP relaxation
    #[arg(long)]
    pub integral: bool,

    /// Solver wall-clock limit in seconds (overrides config)
    #[arg(long)]
    pub time_limit: Option<f64>,
}

/// Arguments for `mindmatch conflicts`.
#[derive(Args, Debug, Clone)]
pub struct ConflictsArgs {
    /// JSON file with `entities`
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Similarity threshold 0-100 (overrides config)
    #[arg(long)]
    pub threshold: Option<u8>,
}
