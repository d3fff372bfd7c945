use thiserror::Error;

/// Failures at the journal's edges: configuration and the persistence
/// collaborator. The calculators themselves never fail; bad input gets the
/// documented neutral fallback instead.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Journal file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed journal file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Invalid trade input: {0}")]
    InvalidTrade(String),
}
