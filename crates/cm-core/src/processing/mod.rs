pub mod is_not_found;
pub mod item_info;
pub mod item_processing_result;
pub mod item_processor;
