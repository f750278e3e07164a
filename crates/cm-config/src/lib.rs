mod api_config;
mod config;
mod environment_config;
mod error;
mod log_level;
mod logging_config;
mod package_config;
mod processing_config;
mod retry_config;

pub use api_config::ApiConfig;
pub use config::Config;
pub use environment_config::{EnvironmentConfig, EnvironmentCredentials};
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use package_config::PackageConfig;
pub use processing_config::ProcessingConfig;
pub use retry_config::RetryConfig;

pub const CONFIG_DIR_ENV: &str = "CM_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".cm";
pub const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_API_BASE_URL: &str = "https://manage.kontent.ai/v2";
pub const MIN_API_TIMEOUT_SECS: u64 = 1;
pub const MAX_API_TIMEOUT_SECS: u64 = 600;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 60;

pub const MIN_PARALLEL_LIMIT: usize = 1;
pub const MAX_PARALLEL_LIMIT: usize = 50;
pub const DEFAULT_PARALLEL_LIMIT: usize = 5;
pub const DEFAULT_SKIP_MISSING_REFERENCES: bool = false;

pub const DEFAULT_PACKAGE_FILENAME: &str = "data.zip";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
