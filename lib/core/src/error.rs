use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid count: {0} (must be non-negative)")]
    InvalidCount(i64),

    #[error("Base model ranking size mismatch: expected {expected}, got {actual}")]
    RankingSizeMismatch { expected: usize, actual: usize },

    #[error("Base model ranked unknown candidate {index} (pool size {pool_size})")]
    UnknownCandidate { index: usize, pool_size: usize },

    #[error("Base model ranked candidate {0} more than once")]
    DuplicateCandidate(usize),

    #[error("Training data not set")]
    MissingTrainingData,

    #[error("Candidate pool not set")]
    MissingCandidates,

    #[error("Model error: {0}")]
    Model(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
