use crate::{MigrationElements, MigrationReference};

use serde::{Deserialize, Serialize};

/// One content item in one language with up to two versions: the
/// published one first, then the newer draft if it exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationItem {
    pub system: MigrationItemSystem,
    pub versions: Vec<MigrationItemVersion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationItemSystem {
    pub name: String,
    pub codename: String,
    pub language: MigrationReference,
    #[serde(rename = "type")]
    pub content_type: MigrationReference,
    pub collection: MigrationReference,
    pub workflow: MigrationReference,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationItemVersion {
    pub elements: MigrationElements,
    #[serde(default)]
    pub schedule: MigrationItemSchedule,
    pub workflow_step: MigrationReference,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationItemSchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_display_timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unpublish_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unpublish_display_timezone: Option<String>,
}

impl MigrationItem {
    /// The version that should end up as the working copy in the target.
    pub fn latest_version(&self) -> Option<&MigrationItemVersion> {
        self.versions.last()
    }
}
