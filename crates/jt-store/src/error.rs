use jt_core::ValidationError;
use jt_service::ServiceError;
use thiserror::Error;

/// Failure of a store mutator. Fetches never return one.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Service(e) if e.is_not_found())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
