//! Error types for bulk load and save.
//!
//! List algorithms never fail; they report absence with `Option`. Only the
//! file collaborator can fail, and it reports through [`Error`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing a value file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be opened.
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file opened but reading it failed partway.
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token was not a signed integer.
    #[error("{path}:{line}: not an integer: {token:?}")]
    Parse {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        token: String,
    },

    /// The target could not be created or written.
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this is a failure to open the input at all.
    pub fn is_open(&self) -> bool {
        return matches!(self, Error::Open { .. });
    }
}

pub type Result<T> = std::result::Result<T, Error>;
