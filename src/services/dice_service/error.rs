use log::error;
use thiserror::Error;

use crate::services::integer_service::error::IntegerServiceError;

pub type Result<T> = std::result::Result<T, DiceServiceError>;

#[derive(Debug, Error)]
pub enum DiceServiceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    IntegerServiceError(IntegerServiceError),
}

impl From<IntegerServiceError> for DiceServiceError {
    fn from(e: IntegerServiceError) -> Self {
        DiceServiceError::IntegerServiceError(e)
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Unable to read dice settings: {0}")]
    Io(std::io::Error),
    #[error("Malformed dice settings: {0}")]
    Json(serde_json::Error),
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        error!("{:?}", e);
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        error!("{:?}", e);
        SettingsError::Json(e)
    }
}
