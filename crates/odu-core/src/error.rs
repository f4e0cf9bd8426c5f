use thiserror::Error;

use crate::validate::IntegrityIssue;

#[derive(Debug, Error)]
pub enum Error {
    #[error("value {value} is outside the byte range 0..=255")]
    OutOfRange { value: i64 },

    #[error("data integrity check failed with {} issue(s)", .0.len())]
    DataIntegrity(Vec<IntegrityIssue>),

    #[error("unknown figure: {0}")]
    UnknownFigure(String),

    #[error("unknown element: {0}")]
    UnknownElement(String),

    #[error("no odu matches {0:?}")]
    UnknownOdu(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// The integrity issues carried by a [`Error::DataIntegrity`], if any.
    pub fn integrity_issues(&self) -> &[IntegrityIssue] {
        if let Self::DataIntegrity(issues) = self {
            issues
        } else {
            &[]
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
