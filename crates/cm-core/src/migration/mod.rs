pub mod migration_asset;
pub mod migration_component;
pub mod migration_data;
pub mod migration_element;
pub mod migration_element_type;
pub mod migration_item;
pub mod migration_reference;
pub mod url_slug_mode;
