//! CLI command handlers
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - Command implementations
//! - Help text generation

pub mod args;
pub mod commands;
pub mod help;
pub mod router;

// Re-export the main CLI structures for convenience
pub use args::{AnalyzeArgs, Cli, Commands, OutputFormat};
pub use help::{generate_help, get_log_level};
pub use router::{execute_command, prepare, PreparedCommand};
