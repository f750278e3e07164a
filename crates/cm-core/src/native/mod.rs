pub mod asset;
pub mod asset_folder;
pub mod collection;
pub mod content_item;
pub mod content_type;
pub mod content_type_element;
pub mod environment_info;
pub mod identifier;
pub mod language;
pub mod language_variant;
pub mod reference;
pub mod taxonomy;
pub mod upsert;
pub mod workflow;
