use cm_client::ClientError;
use cm_config::ConfigError;
use cm_core::{MigrationError, MigrationErrorKind};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("{0}")]
    Migration(#[from] MigrationError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The operator said no; not a failure of the run itself.
    pub fn is_confirmation_refused(&self) -> bool {
        matches!(
            self,
            CliError::Migration(err) if err.kind() == MigrationErrorKind::ConfirmationRefused
        )
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
