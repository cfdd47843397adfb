//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use anyhow::Result;
use std::path::Path;

use crate::cli::args::{AnalyzeArgs, Commands};
use crate::cli::commands::*;
use crate::config::AnalyzerConfig;

/// A command paired with the configuration it runs under
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedCommand {
    Analyze {
        args: AnalyzeArgs,
        config: AnalyzerConfig,
    },
    Schema,
}

impl PreparedCommand {
    /// Log level from the resolved configuration, if the command has one
    pub fn log_level(&self) -> Option<&str> {
        match self {
            Self::Analyze { config, .. } => config.log_level.as_deref(),
            Self::Schema => None,
        }
    }
}

/// Resolve configuration ahead of execution so logging can honor it.
pub fn prepare(command: Commands, base_dir: &Path) -> Result<PreparedCommand> {
    match command {
        Commands::Analyze(args) => {
            let config = resolve_config(&args, base_dir)?;
            Ok(PreparedCommand::Analyze { args, config })
        }
        Commands::Schema => Ok(PreparedCommand::Schema),
    }
}

/// Execute a prepared CLI command
pub fn execute_command(command: PreparedCommand) -> Result<()> {
    match command {
        PreparedCommand::Analyze { args, config } => run_analyze(&args, &config),
        PreparedCommand::Schema => run_schema(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE_NAME;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_analyze_resolves_config() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "log_level = \"warn\"\n",
        )
        .unwrap();

        let prepared = prepare(Commands::Analyze(AnalyzeArgs::default()), temp.path()).unwrap();
        assert_eq!(prepared.log_level(), Some("warn"));
        assert!(matches!(prepared, PreparedCommand::Analyze { .. }));
    }

    #[test]
    fn test_prepare_schema_has_no_config() {
        let temp = TempDir::new().unwrap();
        let prepared = prepare(Commands::Schema, temp.path()).unwrap();
        assert_eq!(prepared, PreparedCommand::Schema);
        assert_eq!(prepared.log_level(), None);
    }
}
