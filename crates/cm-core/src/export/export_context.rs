use crate::{
    Asset, AssetFolder, Collection, ContentItem, FlattenedContentType, Language,
    LanguageVariant, MigrationError, ReferenceState, ReferencedDataInLanguageVariants, Result,
    SourceEnvironmentState, Taxonomy, Workflow,
};

/// Catalog data of the source environment, fetched once per export.
#[derive(Debug, Clone, Default)]
pub struct SourceEnvironmentData {
    pub languages: Vec<Language>,
    pub collections: Vec<Collection>,
    pub workflows: Vec<Workflow>,
    pub content_types: Vec<FlattenedContentType>,
    pub taxonomies: Vec<Taxonomy>,
    pub asset_folders: Vec<AssetFolder>,
}

/// Item and language requested by the operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceExportItem {
    pub item_codename: String,
    pub language_codename: String,
}

impl SourceExportItem {
    pub fn new(item_codename: impl Into<String>, language_codename: impl Into<String>) -> Self {
        Self {
            item_codename: item_codename.into(),
            language_codename: language_codename.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportItemVersion {
    pub workflow_step_codename: String,
    pub language_variant: LanguageVariant,
}

/// A requested item with everything needed to map it without further lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportItem {
    pub request_item: SourceExportItem,
    pub content_item: ContentItem,
    pub versions: Vec<ExportItemVersion>,
    pub language: Language,
    pub collection: Collection,
    pub workflow: Workflow,
    pub content_type: FlattenedContentType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportContextOptions {
    pub skip_missing_references: bool,
}

/// Immutable snapshot of the source environment for one export run.
#[derive(Debug, Clone)]
pub struct ExportContext {
    pub environment_data: SourceEnvironmentData,
    pub referenced_data: ReferencedDataInLanguageVariants,
    pub export_items: Vec<ExportItem>,
    pub options: ExportContextOptions,
    state: SourceEnvironmentState,
}

impl ExportContext {
    pub fn new(
        environment_data: SourceEnvironmentData,
        referenced_data: ReferencedDataInLanguageVariants,
        export_items: Vec<ExportItem>,
        state: SourceEnvironmentState,
        options: ExportContextOptions,
    ) -> Self {
        Self {
            environment_data,
            referenced_data,
            export_items,
            options,
            state,
        }
    }

    /// `Skip` instead of `DoesNotExist` when missing references may be dropped.
    pub fn item_state(&self, id: &str) -> ReferenceState<&ContentItem> {
        self.apply_skip_policy(self.state.item_state(id))
    }

    pub fn asset_state(&self, id: &str) -> ReferenceState<&Asset> {
        self.apply_skip_policy(self.state.asset_state(id))
    }

    fn apply_skip_policy<T>(&self, state: ReferenceState<T>) -> ReferenceState<T> {
        match state {
            ReferenceState::DoesNotExist if self.options.skip_missing_references => {
                ReferenceState::Skip
            }
            other => other,
        }
    }

    /// Assets referenced by the export that exist in the source environment.
    pub fn referenced_assets(&self) -> Vec<&Asset> {
        self.referenced_data
            .asset_ids
            .iter()
            .filter_map(|id| self.asset_state(id).data().copied())
            .collect()
    }

    #[track_caller]
    pub fn content_type_by_id(&self, id: &str) -> Result<&FlattenedContentType> {
        self.environment_data
            .content_types
            .iter()
            .find(|content_type| content_type.id == id)
            .ok_or_else(|| MigrationError::missing_content_type(id))
    }

    pub fn taxonomy_by_id(&self, id: &str) -> Option<&Taxonomy> {
        self.environment_data
            .taxonomies
            .iter()
            .find(|taxonomy| taxonomy.id == id)
    }

    pub fn collection_by_id(&self, id: &str) -> Option<&Collection> {
        self.environment_data
            .collections
            .iter()
            .find(|collection| collection.id == id)
    }

    pub fn language_by_id(&self, id: &str) -> Option<&Language> {
        self.environment_data
            .languages
            .iter()
            .find(|language| language.id == id)
    }

    pub fn asset_folder_by_id(&self, id: &str) -> Option<&AssetFolder> {
        AssetFolder::find_by_id(&self.environment_data.asset_folders, id)
    }
}
