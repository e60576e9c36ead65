//! Command-line interface definition.
//!
//! Lives in the library so that `xtask` can generate man pages from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::extract::Field;

/// Recover tabular records from extracted page text and report statistics.
#[derive(Debug, Parser)]
#[command(name = "pagestat", version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract records and write the summary report
    Analyze(AnalyzeArgs),

    /// Emit one ranked label/value series as JSON
    #[command(long_about = "Emit one ranked label/value series as JSON.\n\n\
        One --by counts records per value, two --by flags count value pairs,\n\
        and --by with --distinct counts distinct members per group.")]
    Series(SeriesArgs),

    /// Emit the standard chart series as one JSON document
    Charts(ChartsArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by every command that reads a document.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Extraction JSON, or plain text with form-feed page breaks
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Prefix that marks a record line (overrides config)
    #[arg(long, value_name = "PREFIX")]
    pub sentinel: Option<String>,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Entries per ranked section (overrides config)
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Print statistics as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Print extraction diagnostics to stderr
    #[arg(long)]
    pub stats: bool,
}

#[derive(Debug, Args)]
pub struct SeriesArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Field to group by; give twice for value pairs
    #[arg(long, required = true, num_args = 1, action = clap::ArgAction::Append, value_name = "FIELD")]
    pub by: Vec<Field>,

    /// Count distinct values of this field per group instead of records
    #[arg(long, value_name = "FIELD")]
    pub distinct: Option<Field>,

    /// Chart title (defaults to a description of the series)
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Number of entries (overrides config)
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ChartsArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Write JSON to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Entries per chart (overrides config)
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Add missing fields to an existing config file
    Migrate {
        /// Apply changes without asking
        #[arg(short, long)]
        yes: bool,
    },
}
