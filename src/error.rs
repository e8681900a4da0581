use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoxevolveError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Genome length mismatch: left parent has {left} genes, right parent has {right}")]
    GenomeLengthMismatch { left: usize, right: usize },

    #[error("Evolution error: {0}")]
    Evolution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoxevolveError>;
