use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("empty iCal data")]
    EmptyInput,

    #[error("invalid iCal format: {0}")]
    InvalidCalendar(#[from] kunai_rfc::error::RfcError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
