use crate::{Config, RetryConfig};
use crate::retry_config::{DEFAULT_BACKOFF_MULTIPLIER, DEFAULT_MAX_ATTEMPTS};
use crate::tests::{EnvGuard, setup_config_dir};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Retry
// =========================================================================

#[test]
#[serial]
fn given_defaults_when_load_then_retry_defaults_applied() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.retry.max_attempts, eq(DEFAULT_MAX_ATTEMPTS));
    assert_that!(config.retry.backoff_multiplier, eq(DEFAULT_BACKOFF_MULTIPLIER));
    assert_that!(config.retry.jitter, eq(true));
}

#[test]
#[serial]
fn given_max_attempts_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _attempts = EnvGuard::set("CM_RETRY_MAX_ATTEMPTS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_attempts_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _attempts = EnvGuard::set("CM_RETRY_MAX_ATTEMPTS", "11");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("retry.max_attempts must be 1-10, got 11")
    );
}

#[test]
#[serial]
fn given_initial_delay_below_min_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _delay = EnvGuard::set("CM_RETRY_INITIAL_DELAY_MS", "5");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_backoff_multiplier_below_min_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _multiplier = EnvGuard::set("CM_RETRY_BACKOFF_MULTIPLIER", "0.5");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_jitter_disabled_by_env_when_load_then_ok_and_disabled() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _jitter = EnvGuard::set("CM_RETRY_JITTER", "false");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.retry.jitter, eq(false));
    assert_that!(config.validate(), ok(anything()));
}

// =========================================================================
// Backoff Schedule
// =========================================================================

#[test]
fn given_defaults_when_backoff_delay_then_doubles_per_retry() {
    // Given
    let config = RetryConfig::default();

    // Then
    assert_that!(config.backoff_delay(1), eq(Duration::from_millis(100)));
    assert_that!(config.backoff_delay(2), eq(Duration::from_millis(200)));
    assert_that!(config.backoff_delay(3), eq(Duration::from_millis(400)));
}

#[test]
fn given_many_retries_when_backoff_delay_then_capped_at_max_delay() {
    // Given
    let config = RetryConfig {
        max_delay_secs: 2,
        ..RetryConfig::default()
    };

    // Then
    assert_that!(config.backoff_delay(10), eq(Duration::from_secs(2)));
    assert_that!(config.backoff_delay(u32::MAX), eq(Duration::from_secs(2)));
}
