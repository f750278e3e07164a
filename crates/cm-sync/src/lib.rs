//! Orchestration of export, import and migrate runs against live
//! environments through the `ManagementApi` seam.

pub(crate) mod environment_catalog;
pub(crate) mod export;
pub(crate) mod import;
pub(crate) mod not_found;
pub mod toolkit;

#[cfg(test)]
mod tests;

pub use environment_catalog::{EnvironmentCatalog, fetch_environment_catalog};
pub use export::export_config::ExportConfig;
pub use export::export_context_fetcher::fetch_export_context;
pub use export::export_manager::ExportManager;
pub use import::import_config::ImportConfig;
pub use import::import_context_fetcher::fetch_import_context;
pub use import::import_manager::ImportManager;
pub use import::import_report::{IMPORT_REPORT_FILENAME, ImportReport, KindReport, ReportedError};
pub use import::import_result::{
    AssetToEdit, EditedAsset, ImportResult, ImportedItem, ImportedLanguageVariant, UploadedAsset,
};
pub use toolkit::MigrationResult;
