//! Scoped analysis context
//!
//! An `AnalysisContext` is created at the start of a run and handed to the
//! load and write steps. It is released exactly once: through `stop()` on the
//! success path, or when dropped on any early return.

use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::analysis::{DepartmentPercentage, EmployeeTable};
use crate::dataset;
use crate::error::Result;

/// Counters collected over the lifetime of a context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub rows_loaded: usize,
    pub rows_written: usize,
    pub files_written: usize,
}

pub struct AnalysisContext {
    app_name: String,
    started_at: Instant,
    stats: RunStats,
    released: bool,
}

impl AnalysisContext {
    pub fn start(app_name: impl Into<String>) -> Self {
        let app_name = app_name.into();
        info!("Starting analysis context '{}'", app_name);
        Self {
            app_name,
            started_at: Instant::now(),
            stats: RunStats::default(),
            released: false,
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Load the employee table at `path`.
    pub fn load(&mut self, path: &Path) -> Result<EmployeeTable> {
        let table = dataset::read_employees(path)?;
        self.stats.rows_loaded += table.len();
        Ok(table)
    }

    /// Write result rows to `path`, replacing any existing file.
    pub fn write(&mut self, rows: &[DepartmentPercentage], path: &Path) -> Result<()> {
        dataset::write_results(rows, path)?;
        self.stats.rows_written += rows.len();
        self.stats.files_written += 1;
        Ok(())
    }

    /// Release the context and return its counters.
    pub fn stop(mut self) -> RunStats {
        self.release();
        std::mem::take(&mut self.stats)
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        debug!("Context stats: {:?}", self.stats);
        info!(
            "Stopped analysis context '{}' after {:.2?}",
            self.app_name,
            self.elapsed()
        );
    }
}

impl Drop for AnalysisContext {
    fn drop(&mut self) {
        if !self.released {
            warn!(
                "Analysis context '{}' released without stop()",
                self.app_name
            );
            self.release();
        }
    }
}
