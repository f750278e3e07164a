use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PARALLEL_LIMIT, DEFAULT_SKIP_MISSING_REFERENCES,
    MAX_PARALLEL_LIMIT, MIN_PARALLEL_LIMIT,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Maximum number of in-flight API operations per batch
    pub parallel_limit: usize,
    /// Drop dangling item and asset references instead of failing the export
    pub skip_missing_references: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            parallel_limit: DEFAULT_PARALLEL_LIMIT,
            skip_missing_references: DEFAULT_SKIP_MISSING_REFERENCES,
        }
    }
}

impl ProcessingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.parallel_limit < MIN_PARALLEL_LIMIT || self.parallel_limit > MAX_PARALLEL_LIMIT {
            return Err(ConfigError::config(format!(
                "processing.parallel_limit must be {}-{}, got {}",
                MIN_PARALLEL_LIMIT, MAX_PARALLEL_LIMIT, self.parallel_limit
            )));
        }

        Ok(())
    }
}
