pub mod export_config;
pub mod export_context_fetcher;
pub mod export_manager;
