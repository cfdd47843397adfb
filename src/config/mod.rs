use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::ConfigLoader;

use crate::analysis::{AnalysisSettings, JoinPolicy};
use crate::error::{common, AnalysisError, ErrorCode, Result};

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE_NAME: &str = "deptsat.toml";

pub const ENV_INPUT: &str = "DEPTSAT_INPUT";
pub const ENV_OUTPUT: &str = "DEPTSAT_OUTPUT";
pub const ENV_LOG_LEVEL: &str = "DEPTSAT_LOG_LEVEL";
pub const ENV_JOIN_POLICY: &str = "DEPTSAT_JOIN_POLICY";
pub const ENV_THRESHOLD: &str = "DEPTSAT_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub app_name: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub log_level: Option<String>,
    pub analysis: AnalysisSettings,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            app_name: "department-satisfaction".to_string(),
            input: PathBuf::from("input/employee_data.csv"),
            output: PathBuf::from("outputs/departments_high_satisfaction.csv"),
            log_level: Some("info".to_string()),
            analysis: AnalysisSettings::default(),
        }
    }
}

/// Values given on the command line; `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub threshold: Option<f64>,
    pub join: Option<JoinPolicy>,
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `DEPTSAT_*` variables from the process environment.
    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_from(|key| std::env::var(key).ok())
    }

    /// Apply `DEPTSAT_*` variables from an arbitrary lookup.
    pub fn merge_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup(ENV_INPUT) {
            self.input = PathBuf::from(input);
        }

        if let Some(output) = lookup(ENV_OUTPUT) {
            self.output = PathBuf::from(output);
        }

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = Some(log_level);
        }

        if let Some(join) = lookup(ENV_JOIN_POLICY) {
            self.analysis.join = join
                .parse()
                .map_err(|_| common::invalid_env(ENV_JOIN_POLICY, &join, "inner or left-zero-fill"))?;
        }

        if let Some(threshold) = lookup(ENV_THRESHOLD) {
            self.analysis.threshold_percent = threshold
                .trim()
                .parse()
                .map_err(|_| common::invalid_env(ENV_THRESHOLD, &threshold, "a number"))?;
        }

        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(input) = &overrides.input {
            self.input = input.clone();
        }
        if let Some(output) = &overrides.output {
            self.output = output.clone();
        }
        if let Some(threshold) = overrides.threshold {
            self.analysis.threshold_percent = threshold;
        }
        if let Some(join) = overrides.join {
            self.analysis.join = join;
        }
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.analysis.threshold_percent;
        if !(0.0..=100.0).contains(&threshold) {
            return Err(AnalysisError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!("threshold_percent must be within 0..=100, got {}", threshold),
            ));
        }

        if self.analysis.cohort.engagement_level.is_empty() {
            return Err(AnalysisError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "cohort.engagement_level must not be empty",
            ));
        }

        if self.input.as_os_str().is_empty() || self.output.as_os_str().is_empty() {
            return Err(AnalysisError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "input and output paths must not be empty",
            ));
        }

        Ok(())
    }
}
