use crate::model::StudentId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Student not found: {0}")]
    StudentNotFound(StudentId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Invalid input: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
