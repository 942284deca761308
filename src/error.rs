use thiserror::Error;

use crate::validate::InvalidReason;

#[derive(Debug, Error)]
pub enum TimeconvError {
    #[error("invalid value '{input}': {reason}")]
    InvalidInput { input: String, reason: InvalidReason },

    #[error("unknown unit '{0}' (expected one of: second, minute, hour, day, month, year)")]
    UnknownUnit(String),

    #[error("unknown language '{0}' (expected 'en' or 'pl')")]
    UnknownLanguage(String),
}

pub type Result<T> = std::result::Result<T, TimeconvError>;
