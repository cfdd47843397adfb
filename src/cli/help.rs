//! Help text generation and utilities

use crate::cli::args::Cli;
use clap::CommandFactory;

/// Generate comprehensive help text for the CLI
pub fn generate_help() -> String {
    Cli::command().render_help().to_string()
}

/// Get the log filter for a `-v` count, falling back to the configured level
pub fn get_log_level(verbose: u8, configured: Option<&str>) -> String {
    match verbose {
        0 => configured.unwrap_or("info").to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(), // -vvv adds thread ids and line numbers, not more events
    }
}
