use crate::{ConfigError, ConfigErrorResult};

use std::fmt;

use serde::Deserialize;

/// Management API credentials of one environment. Both values are optional
/// in the file since most runs only need one side.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub environment_id: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct EnvironmentCredentials {
    pub environment_id: String,
    pub api_key: String,
}

impl EnvironmentConfig {
    /// `role` names the section ("source" or "target") in error messages.
    #[track_caller]
    pub fn credentials(&self, role: &str) -> ConfigErrorResult<EnvironmentCredentials> {
        let environment_id = non_empty(self.environment_id.as_deref()).ok_or_else(|| {
            ConfigError::credentials(format!("{role}.environment_id is required"))
        })?;
        let api_key = non_empty(self.api_key.as_deref())
            .ok_or_else(|| ConfigError::credentials(format!("{role}.api_key is required")))?;

        Ok(EnvironmentCredentials {
            environment_id: environment_id.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn is_configured(&self) -> bool {
        non_empty(self.environment_id.as_deref()).is_some()
            && non_empty(self.api_key.as_deref()).is_some()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

// API keys never reach logs, not even through Debug.
impl fmt::Debug for EnvironmentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentConfig")
            .field("environment_id", &self.environment_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl fmt::Debug for EnvironmentCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentCredentials")
            .field("environment_id", &self.environment_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
