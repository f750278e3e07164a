use crate::{Asset, ContentItem, ReferenceState};

use std::collections::HashMap;

/// Resolved existence of every item and asset id referenced by the export.
/// Built once by the fetcher; lookups never touch the network. The skip
/// policy is applied on top by `ExportContext`.
#[derive(Debug, Clone, Default)]
pub struct SourceEnvironmentState {
    items: HashMap<String, Option<ContentItem>>,
    assets: HashMap<String, Option<Asset>>,
}

impl SourceEnvironmentState {
    pub fn new(
        items: HashMap<String, Option<ContentItem>>,
        assets: HashMap<String, Option<Asset>>,
    ) -> Self {
        Self { items, assets }
    }

    pub fn item_state(&self, id: &str) -> ReferenceState<&ContentItem> {
        self.items.get(id).and_then(Option::as_ref).into()
    }

    pub fn asset_state(&self, id: &str) -> ReferenceState<&Asset> {
        self.assets.get(id).and_then(Option::as_ref).into()
    }
}
