use crate::ExportConfig;
use crate::export::export_context_fetcher::fetch_export_context;

use cm_client::ManagementApi;
use cm_core::{
    Asset, ExportContext, ItemInfo, ItemProcessingResult, MigrationAsset, MigrationData,
    MigrationError, Result, map_to_migration_asset, map_to_migration_items, process_items,
};

use bytes::Bytes;
use log::info;

/// Exports the requested items, and every existing asset they reference,
/// from one source environment.
pub struct ExportManager<'a> {
    api: &'a dyn ManagementApi,
    config: ExportConfig,
}

impl<'a> ExportManager<'a> {
    pub fn new(api: &'a dyn ManagementApi, config: ExportConfig) -> Self {
        Self { api, config }
    }

    pub async fn export(&self) -> Result<MigrationData> {
        info!(
            "Exporting {} item(s), skip missing references: {}",
            self.config.items.len(),
            self.config.skip_missing_references
        );

        let context = fetch_export_context(self.api, &self.config).await?;
        let items = map_to_migration_items(&context)?;
        let assets = self.export_assets(&context).await?;

        info!(
            "Finished export: {} item(s), {} asset(s)",
            items.len(),
            assets.len()
        );

        Ok(MigrationData::new(items, assets))
    }

    /// Binaries that fail to download are reported by the processor and left
    /// out of the package.
    async fn export_assets(&self, context: &ExportContext) -> Result<Vec<MigrationAsset>> {
        let assets: Vec<Asset> = context.referenced_assets().into_iter().cloned().collect();
        let results = download_binaries(self.api, assets, self.config.parallel_limit).await;

        results
            .into_iter()
            .filter_map(|result| match result {
                ItemProcessingResult::Valid { input, output } => Some((input, output)),
                _ => None,
            })
            .map(|(asset, binary_data)| map_to_migration_asset(context, &asset, binary_data))
            .collect()
    }
}

async fn download_binaries(
    api: &dyn ManagementApi,
    assets: Vec<Asset>,
    parallel_limit: usize,
) -> Vec<ItemProcessingResult<Asset, Bytes, MigrationError>> {
    process_items(
        "Downloading assets",
        assets,
        parallel_limit,
        |asset| ItemInfo::new("asset", asset.codename.as_str()),
        move |asset| async move { api.download_binary(&asset.url).await },
    )
    .await
}
