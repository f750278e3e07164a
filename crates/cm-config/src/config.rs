use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, EnvironmentConfig, LoggingConfig, PackageConfig, ProcessingConfig,
    RetryConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub source: EnvironmentConfig,
    pub target: EnvironmentConfig,
    pub api: ApiConfig,
    pub retry: RetryConfig,
    pub processing: ProcessingConfig,
    pub package: PackageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CM_CONFIG_DIR env var, else use ./.cm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: CM_CONFIG_DIR env var > ./.cm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration. Credentials are checked per command,
    /// since export only needs the source and import only the target.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.retry.validate()?;
        self.processing.validate()?;
        self.package.validate()?;

        Ok(())
    }

    /// Package path, resolved against the config directory when relative.
    pub fn package_path(&self) -> ConfigErrorResult<PathBuf> {
        let path = Path::new(&self.package.filename);
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        Ok(Self::config_dir()?.join(path))
    }

    /// Log configuration summary (NEVER logs API keys).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  source: {}",
            self.source.environment_id.as_deref().unwrap_or("<not set>")
        );
        info!(
            "  target: {}",
            self.target.environment_id.as_deref().unwrap_or("<not set>")
        );
        info!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.timeout_secs
        );
        info!(
            "  retry: attempts={}, initial={}ms, max={}s, backoff={}x, jitter={}",
            self.retry.max_attempts,
            self.retry.initial_delay_ms,
            self.retry.max_delay_secs,
            self.retry.backoff_multiplier,
            self.retry.jitter
        );
        info!(
            "  processing: parallel_limit={}, skip_missing_references={}",
            self.processing.parallel_limit, self.processing.skip_missing_references
        );
        info!("  package: {}", self.package.filename);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Environments
        Self::apply_env_option_string(
            "CM_SOURCE_ENVIRONMENT_ID",
            &mut self.source.environment_id,
        );
        Self::apply_env_option_string("CM_SOURCE_API_KEY", &mut self.source.api_key);
        Self::apply_env_option_string(
            "CM_TARGET_ENVIRONMENT_ID",
            &mut self.target.environment_id,
        );
        Self::apply_env_option_string("CM_TARGET_API_KEY", &mut self.target.api_key);

        // API
        Self::apply_env_string("CM_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("CM_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Retry
        Self::apply_env_parse("CM_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse(
            "CM_RETRY_INITIAL_DELAY_MS",
            &mut self.retry.initial_delay_ms,
        );
        Self::apply_env_parse("CM_RETRY_MAX_DELAY_SECS", &mut self.retry.max_delay_secs);
        Self::apply_env_parse(
            "CM_RETRY_BACKOFF_MULTIPLIER",
            &mut self.retry.backoff_multiplier,
        );
        Self::apply_env_bool("CM_RETRY_JITTER", &mut self.retry.jitter);

        // Processing
        Self::apply_env_parse("CM_PARALLEL_LIMIT", &mut self.processing.parallel_limit);
        Self::apply_env_bool(
            "CM_SKIP_MISSING_REFERENCES",
            &mut self.processing.skip_missing_references,
        );

        // Package
        Self::apply_env_string("CM_PACKAGE_FILENAME", &mut self.package.filename);

        // Logging
        Self::apply_env_parse("CM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CM_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
