use thiserror::Error;

/// Main error type for EPC encoding and decoding operations
#[derive(Error, Debug)]
pub enum EpcError {
    #[error("Format error: {0}")]
    Format(String),

    #[error("Range error: {0}")]
    Range(String),

    #[error("Not supported: {0}")]
    NotSupported(String),
}

/// Result type alias for EPC operations
pub type EpcResult<T> = Result<T, EpcError>;
