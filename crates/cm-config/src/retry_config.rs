use crate::{ConfigError, ConfigErrorResult};

use std::fmt::Display;
use std::ops::RangeInclusive;
use std::time::Duration;

use serde::Deserialize;

pub const MAX_ATTEMPTS_RANGE: RangeInclusive<u32> = 1..=10;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

pub const INITIAL_DELAY_MS_RANGE: RangeInclusive<u64> = 10..=10_000;
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 100;

pub const MAX_DELAY_SECS_RANGE: RangeInclusive<u64> = 1..=60;
pub const DEFAULT_MAX_DELAY_SECS: u64 = 5;

pub const BACKOFF_MULTIPLIER_RANGE: RangeInclusive<f64> = 1.0..=10.0;
pub const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;

/// Backoff schedule for Management API calls that fail transiently
/// (rate limiting, server errors, dropped connections).
///
/// The client reads this directly; a `Retry-After` sent by the API replaces
/// the computed delay for that attempt.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    /// Cap for computed delays
    pub max_delay_secs: u64,
    pub backoff_multiplier: f64,
    /// Spread delays over 50-150% so parallel workers do not retry in lockstep
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
            max_delay_secs: DEFAULT_MAX_DELAY_SECS,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
            jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range("retry.max_attempts", self.max_attempts, MAX_ATTEMPTS_RANGE)?;
        check_range(
            "retry.initial_delay_ms",
            self.initial_delay_ms,
            INITIAL_DELAY_MS_RANGE,
        )?;
        check_range(
            "retry.max_delay_secs",
            self.max_delay_secs,
            MAX_DELAY_SECS_RANGE,
        )?;
        check_range(
            "retry.backoff_multiplier",
            self.backoff_multiplier,
            BACKOFF_MULTIPLIER_RANGE,
        )
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_secs(self.max_delay_secs)
    }

    /// Un-jittered delay before retry number `retry` (1 for the first retry).
    pub fn backoff_delay(&self, retry: u32) -> Duration {
        let exponent = i32::try_from(retry.saturating_sub(1)).unwrap_or(i32::MAX);
        let secs = self.initial_delay_ms as f64 / 1000.0 * self.backoff_multiplier.powi(exponent);
        Duration::from_secs_f64(secs.min(self.max_delay_secs as f64).max(0.0))
    }
}

fn check_range<T: PartialOrd + Display>(
    name: &str,
    value: T,
    range: RangeInclusive<T>,
) -> ConfigErrorResult<()> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(ConfigError::config(format!(
        "{name} must be {}-{}, got {value}",
        range.start(),
        range.end()
    )))
}
