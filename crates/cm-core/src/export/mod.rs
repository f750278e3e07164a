pub mod export_context;
pub mod export_mapper;
pub mod referenced_data_scanner;
