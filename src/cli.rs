//! CLI argument parsing for talentrank
//!
//! Global flags: --config, --format, --quiet, --verbose, --offline

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use talentrank_core::format::OutputFormat;

/// Talentrank - rank talent profiles against job templates
#[derive(Parser, Debug)]
#[command(name = "talentrank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: $TALENTRANK_CONFIG_DIR/config.toml or the platform config dir)
    #[arg(long, global = true, env = "TALENTRANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human, json, or records
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "talentrank_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Never call the semantic fit oracle
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List job templates
    Jobs,

    /// Show a job template's requirements
    Show {
        /// Job template id
        job: String,
    },

    /// Rank profiles against a job template
    Rank(RankArgs),

    /// Show the per-criterion score breakdown for named profiles
    Score(ScoreArgs),

    /// Check that the semantic fit oracle answers
    Check,

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug)]
pub struct RankArgs {
    /// Job template id
    pub job: String,

    /// Profiles file (JSON array)
    #[arg(long, short)]
    pub profiles: PathBuf,

    /// Number of results to keep (default from config)
    #[arg(long, short = 'n')]
    pub top: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Job template id
    pub job: String,

    /// Profiles file (JSON array)
    #[arg(long, short)]
    pub profiles: PathBuf,

    /// Case-insensitive substring of the profile name
    #[arg(long)]
    pub name: String,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}
