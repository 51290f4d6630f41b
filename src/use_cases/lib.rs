use std::fmt::Debug;

use entities::custom_methods::TimeParseError;
use thiserror::Error;

pub mod appointments;
pub mod availability;
pub mod calendar;
pub mod store_overrides;
pub mod store_times;
pub mod time_slots;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UseCaseError {
    #[error("BadRequest: {0}")]
    BadRequest(String),
    #[error("NotFound: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("InternalServerError: {0}")]
    InternalServerError(String),
}

impl From<TimeParseError> for UseCaseError {
    fn from(e: TimeParseError) -> Self {
        UseCaseError::BadRequest(e.to_string())
    }
}

pub(crate) fn error_500(e: impl Debug) -> UseCaseError {
    UseCaseError::InternalServerError(format!("{:?}", e))
}
