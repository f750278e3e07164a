use crate::ImportResult;

use cm_core::{ItemProcessingResult, MigrationError, Result};

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const IMPORT_REPORT_FILENAME: &str = "import-report.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedError {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KindReport {
    pub valid: usize,
    pub error: usize,
    pub not_found: usize,
    pub errors: Vec<ReportedError>,
}

impl KindReport {
    fn from_results<I, O>(
        results: &[ItemProcessingResult<I, O, MigrationError>],
        title: impl Fn(&I) -> String,
    ) -> Self {
        let mut report = Self::default();
        for result in results {
            match result {
                ItemProcessingResult::Valid { .. } => report.valid += 1,
                ItemProcessingResult::NotFound { .. } => report.not_found += 1,
                ItemProcessingResult::Error { input, error } => {
                    report.error += 1;
                    report.errors.push(ReportedError {
                        title: title(input),
                        message: error.to_string(),
                    });
                }
            }
        }
        report
    }
}

/// Summary of an import run written next to the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub created_at: DateTime<Utc>,
    pub uploaded_assets: KindReport,
    pub edited_assets: KindReport,
    pub content_items: KindReport,
    pub language_variants: KindReport,
}

impl ImportReport {
    pub fn from_result(result: &ImportResult) -> Self {
        Self {
            created_at: Utc::now(),
            uploaded_assets: KindReport::from_results(&result.uploaded_assets, |asset| {
                asset.codename.clone()
            }),
            edited_assets: KindReport::from_results(&result.edited_assets, |asset| {
                asset.migration_asset.codename.clone()
            }),
            content_items: KindReport::from_results(&result.content_items, |item| {
                item.system.codename.clone()
            }),
            language_variants: KindReport::from_results(&result.language_variants, |item| {
                format!("{} ({})", item.system.codename, item.system.language.codename)
            }),
        }
    }

    /// Writes the report as `import-report.json` into `dir` and returns the
    /// file path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir).map_err(|source| {
            MigrationError::io(format!("Failed to create {}", dir.display()), source)
        })?;

        let path = dir.join(IMPORT_REPORT_FILENAME);
        let content = serde_json::to_string_pretty(self)
            .map_err(|source| MigrationError::serialization("import report", source))?;
        fs::write(&path, content).map_err(|source| {
            MigrationError::io(format!("Failed to write {}", path.display()), source)
        })?;

        Ok(path)
    }
}
