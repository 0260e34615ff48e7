use thiserror::Error;

use crate::cli::ParseError;
use crate::pass::ValidationError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("The form needs a terminal; pass -l <N> to generate without one")]
    NoTerminal,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Parse(_) | Error::Validation(_) | Error::NoTerminal => 2,
            Error::Clipboard(_) | Error::Io(_) => 1,
        }
    }
}
