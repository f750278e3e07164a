use cm_core::{MigrationAsset, MigrationAssetDescription, MigrationReference};

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Asset metadata as stored in `assets.json`. The binary itself lives in
/// the archive at `zip_filename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipAssetRecord {
    #[serde(rename = "_zipFilename")]
    pub zip_filename: String,
    pub filename: String,
    #[serde(default)]
    pub title: Option<String>,
    pub codename: String,
    #[serde(default)]
    pub collection: Option<MigrationReference>,
    #[serde(default)]
    pub descriptions: Vec<MigrationAssetDescription>,
    #[serde(default)]
    pub folder: Option<MigrationReference>,
}

impl ZipAssetRecord {
    pub fn new(asset: &MigrationAsset, zip_filename: String) -> Self {
        Self {
            zip_filename,
            filename: asset.filename.clone(),
            title: asset.title.clone(),
            codename: asset.codename.clone(),
            collection: asset.collection.clone(),
            descriptions: asset.descriptions.clone(),
            folder: asset.folder.clone(),
        }
    }

    pub fn into_asset(self, binary_data: Bytes) -> MigrationAsset {
        MigrationAsset {
            codename: self.codename,
            filename: self.filename,
            title: self.title,
            collection: self.collection,
            folder: self.folder,
            descriptions: self.descriptions,
            binary_data,
        }
    }
}
