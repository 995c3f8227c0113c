use thiserror::Error;

use crate::byte_source::ByteSourceError;

pub type Result<T> = std::result::Result<T, IntegerServiceError>;

#[derive(Debug, Error)]
pub enum IntegerServiceError {
    #[error("Minimum value {min} must be less than or equal to the maximum value {max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Random byte source failure: {0}")]
    EntropySource(ByteSourceError),
    #[error("Random byte source is broken - {attempts} consecutive rejections")]
    EntropyExhausted { attempts: u32 },
}

impl From<ByteSourceError> for IntegerServiceError {
    fn from(e: ByteSourceError) -> Self {
        IntegerServiceError::EntropySource(e)
    }
}
