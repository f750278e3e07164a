//! Entry points used by the `cm` binary and by library callers.

use crate::{ExportConfig, ExportManager, ImportConfig, ImportManager, ImportResult};

use cm_client::ManagementApi;
use cm_core::{MigrationData, Result};

use std::path::Path;

use log::info;

/// Output of a `migrate` run: what was exported and how the import went.
#[derive(Debug)]
pub struct MigrationResult {
    pub migration_data: MigrationData,
    pub import_result: ImportResult,
}

pub async fn export(source: &dyn ManagementApi, config: ExportConfig) -> Result<MigrationData> {
    ExportManager::new(source, config).export().await
}

pub async fn import(
    target: &dyn ManagementApi,
    data: &MigrationData,
    config: ImportConfig,
) -> Result<ImportResult> {
    ImportManager::new(target, config).import(data).await
}

/// Export from `source` and import into `target` without touching storage.
pub async fn migrate(
    source: &dyn ManagementApi,
    target: &dyn ManagementApi,
    export_config: ExportConfig,
    import_config: ImportConfig,
) -> Result<MigrationResult> {
    let migration_data = export(source, export_config).await?;
    let import_result = import(target, &migration_data, import_config).await?;

    Ok(MigrationResult {
        migration_data,
        import_result,
    })
}

pub fn store(data: &MigrationData, path: &Path) -> Result<()> {
    cm_package::store_package(data, path)?;
    info!("Package '{}' was created", path.display());
    Ok(())
}

pub fn extract(path: &Path) -> Result<MigrationData> {
    let data = cm_package::extract_package(path)?;
    info!(
        "Package '{}' was read: {} item(s), {} asset(s)",
        path.display(),
        data.items.len(),
        data.assets.len()
    );
    Ok(data)
}
