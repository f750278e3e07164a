use crate::MigrationReference;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct MigrationAsset {
    pub codename: String,
    pub filename: String,
    pub title: Option<String>,
    pub collection: Option<MigrationReference>,
    pub folder: Option<MigrationReference>,
    pub descriptions: Vec<MigrationAssetDescription>,
    pub binary_data: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationAssetDescription {
    pub language: MigrationReference,
    pub description: Option<String>,
}
