use crate::{create_package, parse_package};

use cm_core::{MigrationData, MigrationError, Result};

use std::path::Path;

use log::info;

/// Writes the zip package for `data` to `path`, creating parent directories.
pub fn store_package(data: &MigrationData, path: &Path) -> Result<()> {
    let package = create_package(data)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            MigrationError::io(format!("Failed to create '{}'", parent.display()), e)
        })?;
    }

    info!("Storing file '{}'", path.display());
    std::fs::write(path, &package)
        .map_err(|e| MigrationError::io(format!("Failed to write '{}'", path.display()), e))
}

pub fn extract_package(path: &Path) -> Result<MigrationData> {
    info!("Reading file '{}'", path.display());
    let content = std::fs::read(path)
        .map_err(|e| MigrationError::io(format!("Failed to read '{}'", path.display()), e))?;

    parse_package(&content)
}
