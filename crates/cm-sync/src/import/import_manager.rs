use crate::import::import_context_fetcher::fetch_import_context;
use crate::import::variant_importer::VariantImporter;
use crate::{
    AssetToEdit, EditedAsset, ImportConfig, ImportReport, ImportResult, ImportedItem,
    ImportedLanguageVariant, UploadedAsset,
};

use cm_client::ManagementApi;
use cm_core::{
    Asset, ContentItem, Identifier, ImportContext, ItemInfo, LanguageVariant, MigrationAsset,
    MigrationData, MigrationError, MigrationItem, Result, map_to_asset_upsert,
    map_to_content_item_upsert, process_items,
};

use std::collections::HashSet;

use log::info;

/// Imports a package into one target environment: assets first, then
/// content items, then the language variants of the items that made it.
pub struct ImportManager<'a> {
    api: &'a dyn ManagementApi,
    config: ImportConfig,
}

impl<'a> ImportManager<'a> {
    pub fn new(api: &'a dyn ManagementApi, config: ImportConfig) -> Self {
        Self { api, config }
    }

    pub async fn import(&self, data: &MigrationData) -> Result<ImportResult> {
        info!(
            "Importing {} item(s) and {} asset(s)",
            data.items.len(),
            data.assets.len()
        );

        let context = fetch_import_context(self.api, data, &self.config).await?;

        let (new_assets, assets_to_edit) = categorize_assets(&context, &data.assets);
        let uploaded_assets = self.upload_assets(&context, new_assets).await;
        let edited_assets = self.edit_assets(&context, assets_to_edit).await;

        let mut seen = HashSet::new();
        let content_items: Vec<MigrationItem> = data
            .items
            .iter()
            .filter(|item| seen.insert(item.system.codename.as_str()))
            .cloned()
            .collect();
        let content_items = self.import_content_items(&context, content_items).await;

        let imported_codenames: HashSet<&str> = content_items
            .iter()
            .filter(|result| result.is_valid())
            .map(|result| result.input().system.codename.as_str())
            .collect();
        let variants: Vec<MigrationItem> = data
            .items
            .iter()
            .filter(|item| imported_codenames.contains(item.system.codename.as_str()))
            .cloned()
            .collect();
        let language_variants = self.import_language_variants(&context, variants).await;

        let result = ImportResult {
            uploaded_assets,
            edited_assets,
            content_items,
            language_variants,
        };

        info!(
            "Finished import: {} uploaded asset(s), {} edited asset(s), {} content item(s), {} language variant(s), {} failure(s)",
            result.uploaded_assets.len(),
            result.edited_assets.len(),
            result.content_items.len(),
            result.language_variants.len(),
            result.error_count()
        );

        if let Some(report_dir) = &self.config.report_dir {
            let path = ImportReport::from_result(&result).write_to(report_dir)?;
            info!("Report '{}' was created", path.display());
        }

        Ok(result)
    }

    async fn upload_assets(
        &self,
        context: &ImportContext,
        assets: Vec<MigrationAsset>,
    ) -> Vec<UploadedAsset> {
        let api = self.api;

        process_items(
            "Uploading assets",
            assets,
            self.config.parallel_limit,
            |asset| ItemInfo::new("asset", asset.codename.as_str()),
            move |asset| upload_asset(api, context, asset),
        )
        .await
    }

    async fn edit_assets(
        &self,
        context: &ImportContext,
        assets: Vec<AssetToEdit>,
    ) -> Vec<EditedAsset> {
        let api = self.api;

        process_items(
            "Editing assets",
            assets,
            self.config.parallel_limit,
            |asset| ItemInfo::new("asset", asset.migration_asset.codename.as_str()),
            move |asset| edit_asset(api, context, asset),
        )
        .await
    }

    async fn import_content_items(
        &self,
        context: &ImportContext,
        items: Vec<MigrationItem>,
    ) -> Vec<ImportedItem> {
        let api = self.api;

        process_items(
            "Importing content items",
            items,
            self.config.parallel_limit,
            |item| ItemInfo::new("content item", item.system.codename.as_str()),
            move |item| import_content_item(api, context, item),
        )
        .await
    }

    async fn import_language_variants(
        &self,
        context: &ImportContext,
        items: Vec<MigrationItem>,
    ) -> Vec<ImportedLanguageVariant> {
        let api = self.api;

        process_items(
            "Importing language variants",
            items,
            self.config.parallel_limit,
            |item| {
                ItemInfo::new(
                    "language variant",
                    format!("{} ({})", item.system.codename, item.system.language.codename),
                )
            },
            move |item| import_language_variant(api, context, item),
        )
        .await
    }
}

/// Splits package assets into ones to create and ones that already exist in
/// the target.
fn categorize_assets(
    context: &ImportContext,
    assets: &[MigrationAsset],
) -> (Vec<MigrationAsset>, Vec<AssetToEdit>) {
    let mut new_assets = Vec::new();
    let mut assets_to_edit = Vec::new();

    for asset in assets {
        let existing = context
            .asset_state(&asset.codename)
            .and_then(|state| state.state.data());
        match existing {
            Some(target_asset) => {
                assets_to_edit.push(AssetToEdit::new(asset.clone(), target_asset.clone()))
            }
            None => new_assets.push(asset.clone()),
        }
    }

    (new_assets, assets_to_edit)
}

async fn upload_asset(
    api: &dyn ManagementApi,
    context: &ImportContext,
    asset: MigrationAsset,
) -> Result<Asset> {
    let file_reference = api
        .upload_binary_file(
            &asset.filename,
            &binary_content_type(&asset.filename),
            asset.binary_data.clone(),
        )
        .await?;

    let upsert = map_to_asset_upsert(&asset, context, Some(file_reference));
    api.upsert_asset(
        &Identifier::ExternalId(context.asset_external_id(&asset.codename)),
        &upsert,
    )
    .await
}

async fn edit_asset(
    api: &dyn ManagementApi,
    context: &ImportContext,
    asset: AssetToEdit,
) -> Result<Asset> {
    let migration_asset = &asset.migration_asset;

    let file_reference = if asset.replace_binary_file {
        Some(
            api.upload_binary_file(
                &migration_asset.filename,
                &binary_content_type(&migration_asset.filename),
                migration_asset.binary_data.clone(),
            )
            .await?,
        )
    } else {
        None
    };

    let upsert = map_to_asset_upsert(migration_asset, context, file_reference);
    api.upsert_asset(
        &Identifier::Codename(migration_asset.codename.clone()),
        &upsert,
    )
    .await
}

async fn import_content_item(
    api: &dyn ManagementApi,
    context: &ImportContext,
    item: MigrationItem,
) -> Result<ContentItem> {
    let codename = &item.system.codename;
    let identifier = match context.item_state(codename) {
        Some(state) if state.state.exists() => Identifier::Codename(codename.clone()),
        _ => Identifier::ExternalId(context.item_external_id(codename)),
    };

    api.upsert_content_item(&identifier, &map_to_content_item_upsert(&item))
        .await
}

async fn import_language_variant(
    api: &dyn ManagementApi,
    context: &ImportContext,
    item: MigrationItem,
) -> Result<Vec<LanguageVariant>> {
    let imported = match VariantImporter::new(api, context, &item) {
        Ok(importer) => importer.import().await,
        Err(err) => Err(err),
    };

    imported.map_err(|err| {
        MigrationError::import_failed_for_item(
            &item.system.codename,
            &item.system.language.codename,
            err.to_string(),
        )
    })
}

fn binary_content_type(filename: &str) -> String {
    mime_guess::from_path(filename)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
