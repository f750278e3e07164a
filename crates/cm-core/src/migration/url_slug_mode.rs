use crate::{MigrationError, Result};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlSlugMode {
    #[default]
    Autogenerated,
    Custom,
}

impl UrlSlugMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Autogenerated => "autogenerated",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for UrlSlugMode {
    type Err = MigrationError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "autogenerated" => Ok(Self::Autogenerated),
            "custom" => Ok(Self::Custom),
            _ => Err(MigrationError::invalid_value(format!(
                "Unknown url slug mode '{s}'"
            ))),
        }
    }
}
