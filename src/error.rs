//!
//! Error type shared by the division reader and the elimination queries
//!
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The division data violates the expected schema
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// A query named a team which is not in the roster
    #[error("unknown team `{0}`")]
    UnknownTeam(String),
    #[error("failed to read division: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
