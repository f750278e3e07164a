use crate::cli::Cli;
use crate::commands::Commands;
use crate::confirmation::confirm;
use crate::{CliResult, logger};

use cm_client::{ManagementApi, ManagementClient};
use cm_config::{Config, EnvironmentCredentials};
use cm_core::{EnvironmentInfo, MigrationData, SourceExportItem};
use cm_sync::{ExportConfig, ImportConfig, ImportResult, toolkit};

use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info, warn};

/// Loads config, installs the logger and executes the parsed command.
///
/// Returns `ExitCode::FAILURE` when the import finished with item errors; a
/// declined confirmation exits successfully without touching anything.
pub async fn run(cli: Cli) -> CliResult<ExitCode> {
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let log_file = match &config.logging.file {
        Some(filename) => Some(Config::config_dir()?.join(filename)),
        None => None,
    };
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting cm v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let result = match cli.command {
        Commands::Export {
            items, filename, ..
        } => export(&config, items, filename, cli.force).await,
        Commands::Import { filename, report } => {
            import(&config, filename, report, cli.force).await
        }
        Commands::Migrate { items, report, .. } => {
            migrate(&config, items, report, cli.force).await
        }
    };

    match result {
        Err(e) if e.is_confirmation_refused() => {
            warn!("Cancelled by the operator");
            Ok(ExitCode::SUCCESS)
        }
        other => other,
    }
}

async fn export(
    config: &Config,
    items: Vec<SourceExportItem>,
    filename: Option<PathBuf>,
    force: bool,
) -> CliResult<ExitCode> {
    let credentials = config.source.credentials("source")?;
    let path = package_path(config, filename)?;
    let source = client(config, &credentials)?;

    confirm(
        &format!(
            "Export {} item(s) from environment {} into '{}'?",
            items.len(),
            environment_label(&source.environment_info().await?),
            path.display()
        ),
        force,
    )?;

    let data = toolkit::export(&source, export_config(config, items)).await?;
    toolkit::store(&data, &path)?;

    Ok(ExitCode::SUCCESS)
}

async fn import(
    config: &Config,
    filename: Option<PathBuf>,
    report: Option<PathBuf>,
    force: bool,
) -> CliResult<ExitCode> {
    let credentials = config.target.credentials("target")?;
    let path = package_path(config, filename)?;
    let data = toolkit::extract(&path)?;
    let target = client(config, &credentials)?;

    confirm(
        &format!(
            "Import {} into environment {}?",
            describe(&data),
            environment_label(&target.environment_info().await?)
        ),
        force,
    )?;

    let result = toolkit::import(&target, &data, import_config(config, report)).await?;

    Ok(exit_code(&result))
}

async fn migrate(
    config: &Config,
    items: Vec<SourceExportItem>,
    report: Option<PathBuf>,
    force: bool,
) -> CliResult<ExitCode> {
    let source_credentials = config.source.credentials("source")?;
    let target_credentials = config.target.credentials("target")?;
    let source = client(config, &source_credentials)?;
    let target = client(config, &target_credentials)?;

    confirm(
        &format!(
            "Migrate {} item(s) from environment {} to {}?",
            items.len(),
            environment_label(&source.environment_info().await?),
            environment_label(&target.environment_info().await?)
        ),
        force,
    )?;

    let result = toolkit::migrate(
        &source,
        &target,
        export_config(config, items),
        import_config(config, report),
    )
    .await?;

    Ok(exit_code(&result.import_result))
}

fn client(config: &Config, credentials: &EnvironmentCredentials) -> CliResult<ManagementClient> {
    Ok(ManagementClient::from_config(config, credentials)?)
}

/// Project and environment names as shown in confirmation prompts.
pub(crate) fn environment_label(info: &EnvironmentInfo) -> String {
    match &info.environment {
        Some(environment) => format!("'{}' / '{}' ({})", info.name, environment, info.id),
        None => format!("'{}' ({})", info.name, info.id),
    }
}

fn package_path(config: &Config, filename: Option<PathBuf>) -> CliResult<PathBuf> {
    match filename {
        Some(path) => Ok(path),
        None => Ok(config.package_path()?),
    }
}

pub(crate) fn export_config(config: &Config, items: Vec<SourceExportItem>) -> ExportConfig {
    ExportConfig::new(items)
        .with_skip_missing_references(config.processing.skip_missing_references)
        .with_parallel_limit(config.processing.parallel_limit)
}

pub(crate) fn import_config(config: &Config, report: Option<PathBuf>) -> ImportConfig {
    let import_config =
        ImportConfig::default().with_parallel_limit(config.processing.parallel_limit);
    match report {
        Some(dir) => import_config.with_report_dir(dir),
        None => import_config,
    }
}

fn describe(data: &MigrationData) -> String {
    let overview = data.overview();
    format!(
        "{} item(s) with {} version(s) and {} asset(s)",
        overview.item_count, overview.version_count, overview.asset_count
    )
}

fn exit_code(result: &ImportResult) -> ExitCode {
    if result.is_success() {
        ExitCode::SUCCESS
    } else {
        error!("Import finished with {} error(s)", result.error_count());
        ExitCode::FAILURE
    }
}
