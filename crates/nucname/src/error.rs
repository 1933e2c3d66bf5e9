//! Result and Error types for the nucname module

/// Type alias for `Result<T, nucname::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, PartialEq)]
/// The error type for `nucdata-nucname`
pub enum Error {
    /// Generic error type for nom parser results
    #[error("could not parse a nuclide from \"{0}\"")]
    ParseError(String),

    /// Symbol is not one of the 118 known elements
    #[error("unknown element symbol \"{0}\"")]
    UnknownElement(String),

    /// Integer does not decode to a valid Z, A, and state
    #[error("invalid nuclide id {0}")]
    InvalidId(u32),

    /// Raw character buffer was not valid UTF-8
    #[error("nuclide buffer is not valid utf-8")]
    InvalidBuffer(#[from] std::str::Utf8Error),
}
