use crate::{MigrationElements, MigrationReference};

use serde::{Deserialize, Serialize};

/// Rich-text-embedded content block. Its id is only meaningful within the
/// owning rich text value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationComponent {
    pub system: MigrationComponentSystem,
    #[serde(default)]
    pub elements: MigrationElements,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationComponentSystem {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: MigrationReference,
}
