use crate::CliError;
use crate::runner::{environment_label, export_config, import_config};

use cm_config::Config;
use cm_core::{EnvironmentInfo, MigrationError, SourceExportItem};

use std::path::PathBuf;

use googletest::prelude::*;

#[test]
fn given_processing_config_when_export_config_built_then_values_carried() {
    // Given
    let mut config = Config::default();
    config.processing.parallel_limit = 7;
    config.processing.skip_missing_references = true;

    // When
    let export = export_config(&config, vec![SourceExportItem::new("home", "en")]);

    // Then
    assert_that!(export.parallel_limit, eq(7));
    assert_that!(export.skip_missing_references, is_true());
    assert_that!(export.items.len(), eq(1));
}

#[test]
fn given_report_dir_when_import_config_built_then_report_enabled() {
    // Given
    let config = Config::default();

    // When
    let with_report = import_config(&config, Some(PathBuf::from("reports")));
    let without_report = import_config(&config, None);

    // Then
    assert_eq!(with_report.report_dir, Some(PathBuf::from("reports")));
    assert_that!(without_report.report_dir.is_none(), is_true());
    assert_that!(
        with_report.parallel_limit,
        eq(config.processing.parallel_limit)
    );
}

#[test]
fn given_refused_confirmation_when_checked_then_recognized() {
    // Given
    let refused = CliError::from(MigrationError::confirmation_refused());
    let failed = CliError::from(MigrationError::api("boom", Some(500)));

    // Then
    assert_that!(refused.is_confirmation_refused(), is_true());
    assert_that!(failed.is_confirmation_refused(), is_false());
}

#[test]
fn given_environment_info_when_labelled_then_project_and_environment_named() {
    // Given
    let production = EnvironmentInfo {
        id: "env-1".to_string(),
        name: "Marketing site".to_string(),
        environment: Some("Production".to_string()),
    };
    let unnamed = EnvironmentInfo {
        environment: None,
        ..production.clone()
    };

    // Then
    assert_that!(
        environment_label(&production),
        eq("'Marketing site' / 'Production' (env-1)")
    );
    assert_that!(environment_label(&unnamed), eq("'Marketing site' (env-1)"));
}
