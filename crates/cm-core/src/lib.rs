pub mod error;
pub mod export;
pub mod external_id;
pub mod import;
pub mod migration;
pub mod native;
pub mod processing;
pub mod schema;
pub mod state;
pub mod translation;
pub mod workflow;

pub use error::migration_error::{InvalidElementContext, MigrationError, Result};
pub use error::migration_error_kind::MigrationErrorKind;
pub use export::export_context::{
    ExportContext, ExportContextOptions, ExportItem, ExportItemVersion, SourceEnvironmentData,
    SourceExportItem,
};
pub use export::export_mapper::{
    map_to_migration_asset, map_to_migration_item, map_to_migration_items,
};
pub use export::referenced_data_scanner::scan_export_items;
pub use external_id::{
    DefaultExternalIdGenerator, ExternalIdGenerator, ExternalIdKey, ExternalIdKind,
};
pub use import::import_context::{ImportContext, TargetEnvironmentData};
pub use import::import_mapper::{
    map_to_asset_upsert, map_to_content_item_upsert, map_to_language_variant_upsert,
};
pub use import::referenced_data_scanner::scan_migration_items;
pub use migration::migration_asset::{MigrationAsset, MigrationAssetDescription};
pub use migration::migration_component::{MigrationComponent, MigrationComponentSystem};
pub use migration::migration_data::{MigrationData, MigrationDataOverview};
pub use migration::migration_element::{MigrationElement, MigrationElements};
pub use migration::migration_element_type::MigrationElementType;
pub use migration::migration_item::{
    MigrationItem, MigrationItemSchedule, MigrationItemSystem, MigrationItemVersion,
};
pub use migration::migration_reference::MigrationReference;
pub use migration::url_slug_mode::UrlSlugMode;
pub use native::asset::{Asset, AssetCollection, AssetDescription, FileReference};
pub use native::asset_folder::AssetFolder;
pub use native::collection::Collection;
pub use native::content_item::ContentItem;
pub use native::content_type::{ContentType, ContentTypeSnippet};
pub use native::content_type_element::{
    ContentTypeElement, ContentTypeElementType, MultipleChoiceOption,
};
pub use native::environment_info::EnvironmentInfo;
pub use native::identifier::Identifier;
pub use native::language::Language;
pub use native::language_variant::{
    ElementValue, LanguageVariant, LanguageVariantElement, VariantComponent, VariantSchedule,
    VariantWorkflow,
};
pub use native::reference::Reference;
pub use native::taxonomy::Taxonomy;
pub use native::upsert::{
    AssetUpsert, ComponentUpsert, ContentItemUpsert, LanguageVariantElementUpsert,
    LanguageVariantUpsert, ScheduleRequest, WorkflowStepChange,
};
pub use native::workflow::{
    Workflow, WorkflowScope, WorkflowStep, WorkflowSystemStep, WorkflowTransition,
};
pub use processing::is_not_found::IsNotFound;
pub use processing::item_info::ItemInfo;
pub use processing::item_processing_result::ItemProcessingResult;
pub use processing::item_processor::{DEFAULT_PARALLEL_LIMIT, process_items};
pub use schema::flattened_content_type::{
    FlattenedContentType, FlattenedContentTypeElement, flatten_content_type,
    flatten_content_types,
};
pub use state::reference_state::ReferenceState;
pub use state::referenced_data::{
    ReferencedDataInLanguageVariants, ReferencedDataInMigrationItems,
};
pub use state::source_environment_state::SourceEnvironmentState;
pub use state::target_environment_state::{
    AssetStateInTargetEnvironment, ItemStateInTargetEnvironment, LanguageVariantStateData,
    LanguageVariantStateInTargetEnvironment, TargetEnvironmentState,
};
pub use translation::export_transforms;
pub use translation::import_transforms;
pub use translation::rich_text_processor;
pub use workflow::variant_workflow_state::VariantWorkflowState;
pub use workflow::workflow_step_graph::{WorkflowStepGraph, WorkflowStepKind, WorkflowStepRef};

#[cfg(test)]
mod tests;
