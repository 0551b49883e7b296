use std::path::PathBuf;

use shared::{domain::EmployerId, error::RecordError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate company id {0} in dataset")]
    DuplicateId(EmployerId),
    #[error("invalid employer record at index {index}: {source}")]
    InvalidRecord { index: usize, source: RecordError },
}
