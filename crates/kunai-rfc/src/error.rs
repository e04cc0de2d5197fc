use thiserror::Error;

use crate::rfc::ical::parse::ParseError;

/// RFC parsing and validation errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Invalid date-time value: {0:?}")]
    InvalidDateTime(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
