//! Result and Error types for the store module

use std::path::PathBuf;

/// Type alias for `Result<T, store::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nucdata-store`
pub enum Error {
    /// Dataset file or directory does not exist
    #[error("reference dataset not found at \"{path:?}\"")]
    DatasetNotFound { path: PathBuf },

    /// Dataset exists but is not in the expected format
    #[error("\"{path:?}\" is not a valid reference dataset ({reason})")]
    WrongFormat { path: PathBuf, reason: String },

    /// The dataset does not contain the requested table
    #[error("reference dataset has no table \"{table}\"")]
    MissingTable { table: String },

    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to serialize/deserialize a byte stream
    #[error("failed binary (de)serialization")]
    Binary(#[from] Box<bincode::ErrorKind>),

    /// Failure reading or writing CSV records
    #[error("failed CSV operation")]
    Csv(#[from] csv::Error),
}
