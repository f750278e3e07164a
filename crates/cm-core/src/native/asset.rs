use crate::Reference;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    #[serde(default)]
    pub codename: String,
    pub file_name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(rename = "type", default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub file_reference: Option<FileReference>,
    #[serde(default)]
    pub descriptions: Vec<AssetDescription>,
    #[serde(default)]
    pub folder: Option<Reference>,
    #[serde(default)]
    pub collection: Option<AssetCollection>,
    #[serde(default)]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescription {
    pub language: Reference,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCollection {
    #[serde(default)]
    pub reference: Option<Reference>,
}

/// Handle of an uploaded binary, returned by the file upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    pub id: String,
    #[serde(rename = "type")]
    pub reference_type: String,
}

impl Asset {
    pub fn collection_id(&self) -> Option<&str> {
        self.collection
            .as_ref()
            .and_then(|collection| collection.reference.as_ref())
            .and_then(|reference| reference.id())
    }
}
