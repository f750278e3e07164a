mod import_mapper;
mod item_processor;
mod migration_error;
mod rich_text_processor;
