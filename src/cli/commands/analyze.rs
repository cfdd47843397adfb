//! The `analyze` command

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::analysis::report;
use crate::analysis::DepartmentPercentage;
use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::config::{AnalyzerConfig, ConfigLoader};
use crate::dataset;
use crate::pipeline;

/// Resolve the configuration for an analyze run from `base_dir`.
pub fn resolve_config(args: &AnalyzeArgs, base_dir: &Path) -> Result<AnalyzerConfig> {
    let config = ConfigLoader::new(base_dir)
        .with_file(args.config.clone())
        .with_overrides(args.overrides())
        .load()?;
    Ok(config)
}

pub fn run_analyze(args: &AnalyzeArgs, config: &AnalyzerConfig) -> Result<()> {
    let outcome = pipeline::run(config, args.dry_run)?;

    match &outcome.written_to {
        Some(path) => println!(
            "Wrote {} department(s) to {}",
            outcome.results.len(),
            path.display()
        ),
        None => {
            let stdout = std::io::stdout();
            print_results(&outcome.results, args.format, stdout.lock())?;
        }
    }

    Ok(())
}

/// Render results for `--dry-run`.
pub fn print_results<W: Write>(
    results: &[DepartmentPercentage],
    format: OutputFormat,
    mut out: W,
) -> Result<()> {
    match format {
        OutputFormat::Table => writeln!(out, "{}", report::percentage_table(results))?,
        OutputFormat::Csv => dataset::write_csv(results, &mut out)?,
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(results).context("Failed to serialize results")?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}
