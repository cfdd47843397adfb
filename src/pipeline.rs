//! One end-to-end run: load, analyze, write.

use std::path::PathBuf;
use tracing::info;

use crate::analysis::{DepartmentPercentage, DepartmentSatisfactionAnalyzer};
use crate::config::AnalyzerConfig;
use crate::context::{AnalysisContext, RunStats};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub results: Vec<DepartmentPercentage>,
    pub stats: RunStats,
    /// Where the results were written; `None` on a dry run
    pub written_to: Option<PathBuf>,
}

/// Run the analysis described by `config`.
///
/// With `dry_run` the results are computed but nothing is written.
pub fn run(config: &AnalyzerConfig, dry_run: bool) -> Result<RunOutcome> {
    let mut ctx = AnalysisContext::start(config.app_name.clone());

    let table = ctx.load(&config.input)?;
    let analyzer = DepartmentSatisfactionAnalyzer::new(config.analysis.clone());
    let results = analyzer.analyze(&table);

    let written_to = if dry_run {
        info!("Dry run, not writing {}", config.output.display());
        None
    } else {
        ctx.write(&results, &config.output)?;
        Some(config.output.clone())
    };

    Ok(RunOutcome {
        results,
        stats: ctx.stop(),
        written_to,
    })
}
