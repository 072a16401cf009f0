use thiserror::Error;

#[derive(Error, Debug)]
pub enum SarfError {
    #[error("Invalid root '{0}': a root is exactly three characters")]
    InvalidRoot(String),

    #[error("Root not found: {0}")]
    RootNotFound(String),

    #[error("Scheme not found: {0}")]
    SchemeNotFound(String),

    #[error("Invalid snapshot: {0}")]
    SnapshotFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SarfError>;
