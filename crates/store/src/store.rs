// standard library
use std::path::PathBuf;

// external crates
use serde::de::DeserializeOwned;

// internal modules
use crate::error::Result;
use crate::table::Table;

/// Environment variable holding the path to the reference dataset
pub const DATA_PATH_VAR: &str = "NUCDATA_PATH";

/// Dataset path used when [DATA_PATH_VAR] is not set
pub const DEFAULT_DATA_PATH: &str = "nuc_data.bin";

/// Resolve the reference dataset path from the environment
///
/// Uses the `NUCDATA_PATH` environment variable if set, otherwise falls back
/// to `nuc_data.bin` in the working directory.
pub fn data_path() -> PathBuf {
    std::env::var_os(DATA_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

/// Source of tabulated reference records
///
/// Implementors yield every row of a named [Table], in stored order,
/// deserialised into the fixed record layout `R` chosen by the caller.
///
/// Stores are read-only. A failed read must leave nothing behind, so callers
/// are free to retry the same read later.
pub trait ReferenceStore {
    /// Read all rows of a table
    fn read_table<R: DeserializeOwned>(&self, table: Table) -> Result<Vec<R>>;
}

impl<S: ReferenceStore + ?Sized> ReferenceStore for &S {
    fn read_table<R: DeserializeOwned>(&self, table: Table) -> Result<Vec<R>> {
        (**self).read_table(table)
    }
}
