pub mod import_context;
pub mod import_mapper;
pub mod referenced_data_scanner;
