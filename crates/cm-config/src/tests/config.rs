use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, ConfigError, DEFAULT_API_BASE_URL, DEFAULT_PACKAGE_FILENAME};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, is_true, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq(DEFAULT_API_BASE_URL));
    assert_that!(config.package.filename.as_str(), eq(DEFAULT_PACKAGE_FILENAME));
    assert_that!(config.processing.parallel_limit, eq(5));
    assert_that!(config.processing.skip_missing_references, eq(false));
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_is_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested").join(".cm");
    let _dir = EnvGuard::set("CM_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.is_dir(), is_true());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [source]
            environment_id = "source-env"

            [api]
            timeout_secs = 120

            [processing]
            parallel_limit = 12
            skip_missing_references = true

            [logging]
            level = "debug"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.source.environment_id.as_deref(), eq(Some("source-env")));
    assert_that!(config.api.timeout_secs, eq(120));
    assert_that!(config.processing.parallel_limit, eq(12));
    assert_that!(config.processing.skip_missing_references, eq(true));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [processing]
            parallel_limit = 12

            [package]
            filename = "from-toml.zip"
        "#,
    )
    .unwrap();
    let _limit = EnvGuard::set("CM_PARALLEL_LIMIT", "3");
    let _package = EnvGuard::set("CM_PACKAGE_FILENAME", "from-env.zip");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.processing.parallel_limit, eq(3));
    assert_that!(config.package.filename.as_str(), eq("from-env.zip"));
}

#[test]
#[serial]
fn given_unparseable_env_var_when_load_then_keeps_previous_value() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _limit = EnvGuard::set("CM_PARALLEL_LIMIT", "many");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.processing.parallel_limit, eq(5));
}

#[test]
#[serial]
fn given_unknown_log_level_when_load_then_falls_back_to_info() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _level = EnvGuard::set("CM_LOG_LEVEL", "chatty");
    let _file = EnvGuard::set("CM_LOG_FILE", "cm.log");
    let _colored = EnvGuard::set("CM_LOG_COLORED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
    assert_that!(config.logging.file.as_deref(), eq(Some("cm.log")));
    assert_that!(config.logging.colored, eq(false));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[processing\nparallel_limit = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    assert_that!(
        matches!(result.unwrap_err(), ConfigError::Toml { .. }),
        is_true()
    );
}

#[test]
#[serial]
fn given_non_http_base_url_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("CM_API_BASE_URL", "ftp://manage.example.com");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_timeout_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("CM_API_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_empty_package_filename_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _package = EnvGuard::set("CM_PACKAGE_FILENAME", "  ");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

// =========================================================================
// Package path
// =========================================================================

#[test]
#[serial]
fn given_relative_package_filename_when_package_path_then_joined_with_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let config = Config::load().unwrap();

    // When
    let path = config.package_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join("data.zip")));
}

#[test]
#[serial]
fn given_absolute_package_filename_when_package_path_then_unchanged() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let absolute = temp.path().join("exports").join("site.zip");
    let _package = EnvGuard::set("CM_PACKAGE_FILENAME", absolute.to_str().unwrap());
    let config = Config::load().unwrap();

    // When
    let path = config.package_path().unwrap();

    // Then
    assert_that!(path, eq(&absolute));
}

#[test]
#[serial]
fn given_config_dir_env_removed_when_config_dir_then_defaults_to_cwd() {
    // Given
    let _dir = EnvGuard::remove("CM_CONFIG_DIR");

    // When
    let dir = Config::config_dir().unwrap();

    // Then
    assert_that!(dir, eq(&std::env::current_dir().unwrap().join(".cm")));
}
