pub mod import_config;
pub mod import_context_fetcher;
pub mod import_manager;
pub mod import_report;
pub mod import_result;
pub(crate) mod variant_importer;
