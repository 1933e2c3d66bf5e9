//! Result and Error types for the lookup module

/// Type alias for `Result<T, lookup::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nucdata-lookup`
pub enum Error {
    /// Failure loading a table from the reference store
    #[error("failed to load reference data, {0}")]
    Store(#[from] nucdata_store::Error),

    /// Legacy fission yield source number outside of 0-3
    #[error("unknown fission yield source {0} (expected 0-3)")]
    UnknownFissionSource(u8),
}
