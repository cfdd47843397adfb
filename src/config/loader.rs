use super::{AnalyzerConfig, ConfigOverrides, CONFIG_FILE_NAME};
use crate::error::{common, AnalysisError, ErrorExt, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Builds an `AnalyzerConfig` from defaults, a TOML file, the environment and
/// command-line overrides, in increasing order of precedence.
pub struct ConfigLoader {
    base_dir: PathBuf,
    explicit_file: Option<PathBuf>,
    overrides: ConfigOverrides,
}

impl ConfigLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            explicit_file: None,
            overrides: ConfigOverrides::default(),
        }
    }

    /// Use this file instead of looking for `deptsat.toml`; it must exist.
    pub fn with_file(mut self, path: Option<PathBuf>) -> Self {
        self.explicit_file = path;
        self
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Load using the process environment.
    pub fn load(&self) -> Result<AnalyzerConfig> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    pub fn load_with_env<F>(&self, lookup: F) -> Result<AnalyzerConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match self.config_file()? {
            Some(path) => load_file(&path)?,
            None => AnalyzerConfig::default(),
        };

        config.merge_env_from(lookup)?;
        config.apply_overrides(&self.overrides);
        config.validate()?;

        debug!(
            "Resolved config: input={}, output={}, threshold={}, join={}",
            config.input.display(),
            config.output.display(),
            config.analysis.threshold_percent,
            config.analysis.join
        );

        Ok(config)
    }

    fn config_file(&self) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.explicit_file {
            if !path.exists() {
                return Err(common::config_not_found(path));
            }
            return Ok(Some(path.clone()));
        }

        let implicit = self.base_dir.join(CONFIG_FILE_NAME);
        Ok(implicit.exists().then_some(implicit))
    }
}

/// Parse a TOML config file. Missing keys keep their defaults.
pub fn load_file(path: &Path) -> Result<AnalyzerConfig> {
    debug!("Loading config from {}", path.display());
    let content = fs::read_to_string(path)
        .to_config_error(format!("Cannot read {}", path.display()))?;
    let config: AnalyzerConfig =
        toml::from_str(&content).map_err(|e| AnalysisError::from(e).with_context(path.display()))?;
    Ok(config)
}
