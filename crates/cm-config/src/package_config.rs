use crate::{ConfigError, ConfigErrorResult, DEFAULT_PACKAGE_FILENAME};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Zip file written by export and read by import
    pub filename: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            filename: String::from(DEFAULT_PACKAGE_FILENAME),
        }
    }
}

impl PackageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.filename.trim().is_empty() {
            return Err(ConfigError::package("package.filename cannot be empty"));
        }

        Ok(())
    }
}
