//! Transport package: items, asset records and asset binaries in one zip.

pub(crate) mod package_file;
pub(crate) mod zip_asset_record;
pub(crate) mod zip_transformer;

#[cfg(test)]
mod tests;

pub use package_file::{extract_package, store_package};
pub use zip_asset_record::ZipAssetRecord;
pub use zip_transformer::{
    ASSETS_FILENAME, BINARY_DATA_FOLDER, ITEMS_FILENAME, asset_binary_path, create_package,
    parse_package,
};
