use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no label table exists")]
    NoTable,

    #[error("cannot allocate space in memory")]
    Alloc(#[from] TryReserveError),

    #[error("a duplicate label was found: `{0}`")]
    Duplicate(String),

    #[error("Undefined label: `{0}`")]
    UndefinedLabel(String),

    #[error("Failed to write label dump")]
    Io(#[from] std::io::Error),
}

/// How far an error reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The operation could not run. The table is left as it was.
    Fatal,
    /// The request was refused; nothing is broken.
    Rejected,
    /// A name was asked for that was never defined.
    Missing,
}

impl Error {
    pub fn severity(&self) -> Severity {
        match self {
            Error::NoTable | Error::Alloc(_) | Error::Io(_) => Severity::Fatal,
            Error::Duplicate(_) => Severity::Rejected,
            Error::UndefinedLabel(_) => Severity::Missing,
        }
    }
}
