use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "Encountered an IO error while writing a log record ({})",
        .0.kind()
    )]
    Io(#[from] io::Error),

    #[error("Failed to serialize a log record field ({0})")]
    FieldSerialization(#[from] serde_json::Error),
}
