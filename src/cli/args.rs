//! CLI argument structures
//!
//! This module defines all command-line interface structures used by deptsat.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::analysis::JoinPolicy;
use crate::config::ConfigOverrides;

/// Find departments where most employees are highly satisfied and engaged
#[derive(Parser)]
#[command(name = "deptsat")]
#[command(about = "deptsat - Find departments where most employees are highly satisfied and engaged", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Analyze an employee CSV and write the qualifying departments (default)
    #[command(name = "analyze")]
    Analyze(AnalyzeArgs),

    /// Print the expected input schema
    #[command(name = "schema")]
    Schema,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Analyze(AnalyzeArgs::default())
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct AnalyzeArgs {
    /// Employee CSV to read
    #[arg(short = 'i', long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Where to write the result CSV (overwritten if present)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a TOML configuration file (defaults to ./deptsat.toml if present)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Departments must exceed this percentage (default: 50)
    #[arg(long, value_name = "PERCENT")]
    pub threshold: Option<f64>,

    /// How departments without cohort members are joined
    #[arg(long, value_enum)]
    pub join: Option<JoinPolicy>,

    /// Print the results instead of writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for --dry-run
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl AnalyzeArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input: self.input.clone(),
            output: self.output.clone(),
            threshold: self.threshold,
            join: self.join,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}
