use crate::{MigrationAsset, MigrationItem};

use std::collections::BTreeSet;

/// Everything that travels between environments in one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MigrationData {
    pub items: Vec<MigrationItem>,
    pub assets: Vec<MigrationAsset>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationDataOverview {
    pub item_count: usize,
    pub asset_count: usize,
    pub version_count: usize,
    pub languages: BTreeSet<String>,
    pub content_types: BTreeSet<String>,
    pub total_binary_bytes: usize,
}

impl MigrationData {
    pub fn new(items: Vec<MigrationItem>, assets: Vec<MigrationAsset>) -> Self {
        Self { items, assets }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.assets.is_empty()
    }

    pub fn overview(&self) -> MigrationDataOverview {
        MigrationDataOverview {
            item_count: self.items.len(),
            asset_count: self.assets.len(),
            version_count: self.items.iter().map(|item| item.versions.len()).sum(),
            languages: self
                .items
                .iter()
                .map(|item| item.system.language.codename.clone())
                .collect(),
            content_types: self
                .items
                .iter()
                .map(|item| item.system.content_type.codename.clone())
                .collect(),
            total_binary_bytes: self.assets.iter().map(|asset| asset.binary_data.len()).sum(),
        }
    }
}
