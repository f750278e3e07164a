use crate::{Asset, ContentItem, LanguageVariant, ReferenceState, VariantWorkflowState};

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ItemStateInTargetEnvironment {
    pub codename: String,
    pub state: ReferenceState<ContentItem>,
    pub external_id_to_use: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetStateInTargetEnvironment {
    pub codename: String,
    pub state: ReferenceState<Asset>,
    pub external_id_to_use: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageVariantStateData {
    pub variant: LanguageVariant,
    pub workflow_codename: String,
    pub step_codename: String,
    pub workflow_state: VariantWorkflowState,
}

/// Published and draft variants of one item in one language. Both are
/// present when a newer version was created on top of a published one.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageVariantStateInTargetEnvironment {
    pub item_codename: String,
    pub language_codename: String,
    pub published: Option<LanguageVariantStateData>,
    pub draft: Option<LanguageVariantStateData>,
}

impl LanguageVariantStateInTargetEnvironment {
    pub fn exists(&self) -> bool {
        self.published.is_some() || self.draft.is_some()
    }

    pub fn latest(&self) -> Option<&LanguageVariantStateData> {
        self.draft.as_ref().or(self.published.as_ref())
    }
}

/// Target environment index keyed by codename, built once before import.
#[derive(Debug, Clone, Default)]
pub struct TargetEnvironmentState {
    items: HashMap<String, ItemStateInTargetEnvironment>,
    assets: HashMap<String, AssetStateInTargetEnvironment>,
    variants: HashMap<(String, String), LanguageVariantStateInTargetEnvironment>,
}

impl TargetEnvironmentState {
    pub fn new(
        items: Vec<ItemStateInTargetEnvironment>,
        assets: Vec<AssetStateInTargetEnvironment>,
        variants: Vec<LanguageVariantStateInTargetEnvironment>,
    ) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| (item.codename.clone(), item))
                .collect(),
            assets: assets
                .into_iter()
                .map(|asset| (asset.codename.clone(), asset))
                .collect(),
            variants: variants
                .into_iter()
                .map(|variant| {
                    (
                        (
                            variant.item_codename.clone(),
                            variant.language_codename.clone(),
                        ),
                        variant,
                    )
                })
                .collect(),
        }
    }

    pub fn item_state(&self, codename: &str) -> Option<&ItemStateInTargetEnvironment> {
        self.items.get(codename)
    }

    pub fn asset_state(&self, codename: &str) -> Option<&AssetStateInTargetEnvironment> {
        self.assets.get(codename)
    }

    pub fn variant_state(
        &self,
        item_codename: &str,
        language_codename: &str,
    ) -> Option<&LanguageVariantStateInTargetEnvironment> {
        self.variants
            .get(&(item_codename.to_string(), language_codename.to_string()))
    }
}
