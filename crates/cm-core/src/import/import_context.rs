use crate::rich_text_processor::{CodenameResolution, is_missing_reference_placeholder};
use crate::{
    AssetFolder, AssetStateInTargetEnvironment, Collection, ExternalIdGenerator, ExternalIdKey,
    ExternalIdKind, FlattenedContentType, FlattenedContentTypeElement, ItemStateInTargetEnvironment,
    Language, LanguageVariantStateInTargetEnvironment, MigrationElementType, MigrationError,
    Reference, ReferencedDataInMigrationItems, Result, TargetEnvironmentState, Taxonomy, Workflow,
};

use std::sync::Arc;

use log::warn;

/// Catalog data of the target environment, fetched once per import.
#[derive(Debug, Clone, Default)]
pub struct TargetEnvironmentData {
    pub languages: Vec<Language>,
    pub collections: Vec<Collection>,
    pub workflows: Vec<Workflow>,
    pub content_types: Vec<FlattenedContentType>,
    pub taxonomies: Vec<Taxonomy>,
    pub asset_folders: Vec<AssetFolder>,
}

/// Immutable snapshot of the target environment for one import run.
#[derive(Clone)]
pub struct ImportContext {
    pub environment_data: TargetEnvironmentData,
    pub referenced_data: ReferencedDataInMigrationItems,
    state: TargetEnvironmentState,
    external_id_generator: Arc<dyn ExternalIdGenerator>,
}

impl ImportContext {
    pub fn new(
        environment_data: TargetEnvironmentData,
        referenced_data: ReferencedDataInMigrationItems,
        state: TargetEnvironmentState,
        external_id_generator: Arc<dyn ExternalIdGenerator>,
    ) -> Self {
        Self {
            environment_data,
            referenced_data,
            state,
            external_id_generator,
        }
    }

    pub fn item_state(&self, codename: &str) -> Option<&ItemStateInTargetEnvironment> {
        self.state.item_state(codename)
    }

    pub fn asset_state(&self, codename: &str) -> Option<&AssetStateInTargetEnvironment> {
        self.state.asset_state(codename)
    }

    pub fn variant_state(
        &self,
        item_codename: &str,
        language_codename: &str,
    ) -> Option<&LanguageVariantStateInTargetEnvironment> {
        self.state.variant_state(item_codename, language_codename)
    }

    pub fn item_external_id(&self, codename: &str) -> String {
        match self.item_state(codename) {
            Some(state) => state.external_id_to_use.clone(),
            None => self.generate_external_id(ExternalIdKind::Item, codename),
        }
    }

    pub fn asset_external_id(&self, codename: &str) -> String {
        match self.asset_state(codename) {
            Some(state) => state.external_id_to_use.clone(),
            None => self.generate_external_id(ExternalIdKind::Asset, codename),
        }
    }

    /// Existing items are referenced by codename, the rest by the external
    /// id they will be created with.
    pub fn item_reference(&self, codename: &str) -> Reference {
        match self.item_state(codename) {
            Some(state) if state.state.exists() => Reference::by_codename(codename),
            _ => Reference::by_external_id(self.item_external_id(codename)),
        }
    }

    pub fn asset_reference(&self, codename: &str) -> Reference {
        match self.asset_state(codename) {
            Some(state) if state.state.exists() => Reference::by_codename(codename),
            _ => Reference::by_external_id(self.asset_external_id(codename)),
        }
    }

    pub fn item_codename_resolution(&self, codename: &str) -> CodenameResolution {
        if is_missing_reference_placeholder(codename) {
            warn!("Dropping rich text reference to item skipped on export: {codename}");
            return CodenameResolution::Remove;
        }
        match self.item_state(codename) {
            Some(state) if state.state.exists() => CodenameResolution::Keep,
            _ => CodenameResolution::ExternalId(self.item_external_id(codename)),
        }
    }

    pub fn asset_codename_resolution(&self, codename: &str) -> CodenameResolution {
        if is_missing_reference_placeholder(codename) {
            warn!("Dropping rich text reference to asset skipped on export: {codename}");
            return CodenameResolution::Remove;
        }
        match self.asset_state(codename) {
            Some(state) if state.state.exists() => CodenameResolution::Keep,
            _ => CodenameResolution::ExternalId(self.asset_external_id(codename)),
        }
    }

    #[track_caller]
    pub fn content_type_by_codename(&self, codename: &str) -> Result<&FlattenedContentType> {
        self.environment_data
            .content_types
            .iter()
            .find(|content_type| content_type.codename == codename)
            .ok_or_else(|| MigrationError::missing_content_type(codename))
    }

    /// Element of a target content type, checked against the type of the
    /// value about to be written into it.
    #[track_caller]
    pub fn element(
        &self,
        content_type_codename: &str,
        element_codename: &str,
        expected_type: MigrationElementType,
    ) -> Result<&FlattenedContentTypeElement> {
        let content_type = self.content_type_by_codename(content_type_codename)?;
        let element = content_type
            .element_by_codename(element_codename)
            .ok_or_else(|| {
                MigrationError::missing_content_type_element(
                    content_type_codename,
                    element_codename,
                )
            })?;

        if element.element_type != expected_type {
            return Err(MigrationError::element_type_mismatch(
                content_type_codename,
                element_codename,
                element.element_type.as_str(),
                expected_type,
            ));
        }

        Ok(element)
    }

    pub fn taxonomy_by_id(&self, id: &str) -> Option<&Taxonomy> {
        self.environment_data
            .taxonomies
            .iter()
            .find(|taxonomy| taxonomy.id == id)
    }

    #[track_caller]
    pub fn workflow_by_codename(&self, codename: &str) -> Result<&Workflow> {
        self.environment_data
            .workflows
            .iter()
            .find(|workflow| workflow.codename == codename)
            .ok_or_else(|| MigrationError::missing_catalog_entry("workflow", codename))
    }

    pub fn asset_folder_by_codename(&self, codename: &str) -> Option<&AssetFolder> {
        AssetFolder::find_by_codename(&self.environment_data.asset_folders, codename)
    }

    fn generate_external_id(&self, kind: ExternalIdKind, codename: &str) -> String {
        self.external_id_generator
            .generate(&ExternalIdKey { kind, codename })
    }
}
