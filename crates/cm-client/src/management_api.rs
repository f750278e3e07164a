use cm_core::{
    Asset, AssetFolder, AssetUpsert, Collection, ContentItem, ContentItemUpsert, ContentType,
    ContentTypeSnippet, EnvironmentInfo, FileReference, Identifier, Language, LanguageVariant,
    LanguageVariantUpsert, Result, ScheduleRequest, Taxonomy, Workflow, WorkflowStepChange,
};

use async_trait::async_trait;
use bytes::Bytes;

/// Operations the migration toolkit needs from one environment.
///
/// Errors are reported as `MigrationError::Api`; a missing entity carries
/// status 404 so callers can tell "not found" apart from real failures.
#[async_trait]
pub trait ManagementApi: Send + Sync {
    async fn environment_info(&self) -> Result<EnvironmentInfo>;

    // Catalogs
    async fn list_languages(&self) -> Result<Vec<Language>>;
    async fn list_collections(&self) -> Result<Vec<Collection>>;
    async fn list_workflows(&self) -> Result<Vec<Workflow>>;
    async fn list_taxonomies(&self) -> Result<Vec<Taxonomy>>;
    async fn list_asset_folders(&self) -> Result<Vec<AssetFolder>>;
    async fn list_content_types(&self) -> Result<Vec<ContentType>>;
    async fn list_content_type_snippets(&self) -> Result<Vec<ContentTypeSnippet>>;

    // Content items
    async fn view_content_item(&self, item: &Identifier) -> Result<ContentItem>;
    async fn upsert_content_item(
        &self,
        item: &Identifier,
        data: &ContentItemUpsert,
    ) -> Result<ContentItem>;

    // Language variants
    async fn view_language_variant(
        &self,
        item: &Identifier,
        language: &Identifier,
    ) -> Result<LanguageVariant>;
    async fn view_published_language_variant(
        &self,
        item: &Identifier,
        language: &Identifier,
    ) -> Result<LanguageVariant>;
    async fn upsert_language_variant(
        &self,
        item: &Identifier,
        language: &Identifier,
        data: &LanguageVariantUpsert,
    ) -> Result<LanguageVariant>;
    async fn create_new_version(&self, item: &Identifier, language: &Identifier) -> Result<()>;
    async fn change_workflow(
        &self,
        item: &Identifier,
        language: &Identifier,
        change: &WorkflowStepChange,
    ) -> Result<()>;
    /// Publishes now, or schedules when `schedule.scheduled_to` is set.
    async fn publish(
        &self,
        item: &Identifier,
        language: &Identifier,
        schedule: &ScheduleRequest,
    ) -> Result<()>;
    async fn cancel_scheduled_publish(
        &self,
        item: &Identifier,
        language: &Identifier,
    ) -> Result<()>;
    async fn unpublish_and_archive(
        &self,
        item: &Identifier,
        language: &Identifier,
        schedule: &ScheduleRequest,
    ) -> Result<()>;

    // Assets
    async fn view_asset(&self, asset: &Identifier) -> Result<Asset>;
    async fn upload_binary_file(
        &self,
        filename: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<FileReference>;
    async fn upsert_asset(&self, asset: &Identifier, data: &AssetUpsert) -> Result<Asset>;
    async fn download_binary(&self, url: &str) -> Result<Bytes>;
}
