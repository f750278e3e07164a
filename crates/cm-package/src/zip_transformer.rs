use crate::ZipAssetRecord;

use cm_core::{MigrationData, MigrationError, MigrationItem, Result};

use std::io::{Cursor, Read, Seek, Write};

use bytes::Bytes;
use log::{debug, info};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub const ITEMS_FILENAME: &str = "items.json";
pub const ASSETS_FILENAME: &str = "assets.json";
pub const BINARY_DATA_FOLDER: &str = "binary_data";

const COMPRESSION_LEVEL: i64 = 9;

/// `binary_data/<first two chars of codename>/<codename>/<filename>`
pub fn asset_binary_path(codename: &str, filename: &str) -> String {
    let shard: String = codename.chars().take(2).collect();
    format!("{BINARY_DATA_FOLDER}/{shard}/{codename}/{filename}")
}

/// Serializes migration data into an in-memory zip archive.
pub fn create_package(data: &MigrationData) -> Result<Bytes> {
    info!(
        "Creating zip package ({} item(s), {} asset(s))",
        data.items.len(),
        data.assets.len()
    );

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL));
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let items = serde_json::to_vec(&data.items)
        .map_err(|e| MigrationError::serialization("Failed to serialize items", e))?;
    write_entry(&mut zip, ITEMS_FILENAME, &items, options)?;

    let mut records = Vec::with_capacity(data.assets.len());
    for asset in &data.assets {
        let path = asset_binary_path(&asset.codename, &asset.filename);
        debug!("Adding binary '{}' ({} bytes)", path, asset.binary_data.len());
        write_entry(&mut zip, &path, &asset.binary_data, options)?;
        records.push(ZipAssetRecord::new(asset, path));
    }

    let records = serde_json::to_vec(&records)
        .map_err(|e| MigrationError::serialization("Failed to serialize asset records", e))?;
    write_entry(&mut zip, ASSETS_FILENAME, &records, options)?;

    let cursor = zip
        .finish()
        .map_err(|e| MigrationError::invalid_package(format!("Failed to finish zip: {e}")))?;

    Ok(Bytes::from(cursor.into_inner()))
}

fn write_entry<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    content: &[u8],
    options: SimpleFileOptions,
) -> Result<()> {
    zip.start_file(name, options).map_err(|e| {
        MigrationError::invalid_package(format!("Failed to add '{name}' to zip: {e}"))
    })?;
    zip.write_all(content)
        .map_err(|e| MigrationError::io(format!("Failed to write '{name}' to zip"), e))
}

/// Reads a package produced by [`create_package`]. Missing `items.json` or
/// `assets.json` read as empty lists; any other inconsistency is fatal.
pub fn parse_package(content: &[u8]) -> Result<MigrationData> {
    info!("Parsing zip package ({} bytes)", content.len());

    let mut archive = ZipArchive::new(Cursor::new(content))
        .map_err(|e| MigrationError::invalid_package(format!("Not a zip archive: {e}")))?;

    let items: Vec<MigrationItem> = match read_entry(&mut archive, ITEMS_FILENAME)? {
        Some(json) => serde_json::from_slice(&json).map_err(|e| {
            MigrationError::invalid_package(format!("'{ITEMS_FILENAME}' is malformed: {e}"))
        })?,
        None => Vec::new(),
    };

    let records: Vec<ZipAssetRecord> = match read_entry(&mut archive, ASSETS_FILENAME)? {
        Some(json) => serde_json::from_slice(&json).map_err(|e| {
            MigrationError::invalid_package(format!("'{ASSETS_FILENAME}' is malformed: {e}"))
        })?,
        None => Vec::new(),
    };

    let mut assets = Vec::with_capacity(records.len());
    for record in records {
        let binary = read_entry(&mut archive, &record.zip_filename)?.ok_or_else(|| {
            MigrationError::invalid_package(format!(
                "Could not load binary data for file '{}'",
                record.zip_filename
            ))
        })?;
        assets.push(record.into_asset(Bytes::from(binary)));
    }

    info!(
        "Parsed {} item(s) and {} asset(s)",
        items.len(),
        assets.len()
    );

    Ok(MigrationData::new(items, assets))
}

fn read_entry<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<Vec<u8>>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => {
            return Err(MigrationError::invalid_package(format!(
                "Failed to open '{name}': {e}"
            )));
        }
    };

    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .map_err(|e| MigrationError::invalid_package(format!("Failed to read '{name}': {e}")))?;
    Ok(Some(content))
}
