pub mod export_transforms;
pub mod import_transforms;
pub mod rich_text_processor;
