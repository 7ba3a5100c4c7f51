use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Process-level failures of the `hwinfo` tool.
///
/// A missing host attribute is not one of these: it is carried as
/// `AttributeResult::Unavailable` and dropped at render time.
#[derive(Error, Debug)]
pub enum HwError {
    Io(#[from] std::io::Error),
    Serialization(String),
    Fixture(String),
    Internal(String),
    Other(#[from] anyhow::Error),
}

impl Display for HwError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            HwError::Io(e) => write!(f, "I/O error: {}", e),
            HwError::Serialization(s) => write!(f, "Serialization error: {}", s),
            HwError::Fixture(s) => write!(f, "Invalid fixture: {}", s),
            HwError::Internal(s) => write!(f, "Internal error: {}", s),
            HwError::Other(e) => write!(f, "Other error: {}", e),
        }
    }
}

impl From<serde_json::Error> for HwError {
    fn from(err: serde_json::Error) -> Self {
        HwError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HwError>;
