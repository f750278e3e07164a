use cm_core::SourceExportItem;

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Export content items and the assets they use into a package file
    Export {
        /// Items as `codename:language`, comma separated or repeated
        #[arg(short, long, required = true, value_delimiter = ',', value_parser = parse_export_item)]
        items: Vec<SourceExportItem>,

        /// Package file (defaults to package.filename from config)
        #[arg(short, long)]
        filename: Option<PathBuf>,

        /// Leave out linked items and assets that no longer exist
        #[arg(long)]
        skip_missing_references: bool,
    },

    /// Import a package file into the target environment
    Import {
        /// Package file (defaults to package.filename from config)
        #[arg(short, long)]
        filename: Option<PathBuf>,

        /// Directory to write import-report.json into
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Export from the source environment and import into the target in one run
    Migrate {
        /// Items as `codename:language`, comma separated or repeated
        #[arg(short, long, required = true, value_delimiter = ',', value_parser = parse_export_item)]
        items: Vec<SourceExportItem>,

        /// Leave out linked items and assets that no longer exist
        #[arg(long)]
        skip_missing_references: bool,

        /// Directory to write import-report.json into
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

impl Commands {
    pub(crate) fn skip_missing_references(&self) -> bool {
        match self {
            Commands::Export {
                skip_missing_references,
                ..
            }
            | Commands::Migrate {
                skip_missing_references,
                ..
            } => *skip_missing_references,
            Commands::Import { .. } => false,
        }
    }
}

/// Parses `codename:language` into an export request.
pub fn parse_export_item(value: &str) -> Result<SourceExportItem, String> {
    let (codename, language) = value
        .split_once(':')
        .ok_or_else(|| format!("expected `codename:language`, got '{value}'"))?;

    let codename = codename.trim();
    let language = language.trim();
    if codename.is_empty() || language.is_empty() {
        return Err(format!(
            "both codename and language are required, got '{value}'"
        ));
    }

    Ok(SourceExportItem::new(codename, language))
}
