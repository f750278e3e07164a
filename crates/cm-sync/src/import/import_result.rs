use cm_core::{
    Asset, ContentItem, ItemProcessingResult, LanguageVariant, MigrationAsset, MigrationError,
    MigrationItem,
};

/// An asset that already exists in the target and only needs its metadata
/// updated, plus its binary when filename or size changed.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetToEdit {
    pub migration_asset: MigrationAsset,
    pub target_asset: Asset,
    pub replace_binary_file: bool,
}

impl AssetToEdit {
    pub fn new(migration_asset: MigrationAsset, target_asset: Asset) -> Self {
        let replace_binary_file = migration_asset.filename != target_asset.file_name
            || migration_asset.binary_data.len() as u64 != target_asset.size;

        Self {
            migration_asset,
            target_asset,
            replace_binary_file,
        }
    }
}

pub type UploadedAsset = ItemProcessingResult<MigrationAsset, Asset, MigrationError>;
pub type EditedAsset = ItemProcessingResult<AssetToEdit, Asset, MigrationError>;
pub type ImportedItem = ItemProcessingResult<MigrationItem, ContentItem, MigrationError>;
pub type ImportedLanguageVariant =
    ItemProcessingResult<MigrationItem, Vec<LanguageVariant>, MigrationError>;

/// Per-kind outcome of one import run, one entry per processed input.
#[derive(Debug, Default)]
pub struct ImportResult {
    pub uploaded_assets: Vec<UploadedAsset>,
    pub edited_assets: Vec<EditedAsset>,
    pub content_items: Vec<ImportedItem>,
    pub language_variants: Vec<ImportedLanguageVariant>,
}

impl ImportResult {
    pub fn error_count(&self) -> usize {
        count_errors(&self.uploaded_assets)
            + count_errors(&self.edited_assets)
            + count_errors(&self.content_items)
            + count_errors(&self.language_variants)
    }

    pub fn is_success(&self) -> bool {
        self.error_count() == 0
    }
}

fn count_errors<I, O>(results: &[ItemProcessingResult<I, O, MigrationError>]) -> usize {
    results.iter().filter(|result| !result.is_valid()).count()
}
