use crate::Reference;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub name: String,
    pub codename: String,
    #[serde(rename = "type")]
    pub content_type: Reference,
    pub collection: Reference,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
}
