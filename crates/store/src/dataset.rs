//! Binary reference datasets
//!
//! A dataset file is a short header followed by every table, each table
//! stored as an independently encoded sequence of records.
//!
//! ```text
//! magic      8 bytes  "NUCDATA\0"
//! version    u16
//! tables     map of table path -> bincode encoded Vec<Record>
//! ```

// standard library
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

// external crates
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// internal modules
use crate::error::{Error, Result};
use crate::store::{data_path, ReferenceStore};
use crate::table::Table;

const MAGIC: [u8; 8] = *b"NUCDATA\0";
const FORMAT_VERSION: u16 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    magic: [u8; 8],
    version: u16,
}

/// An in-memory reference dataset
///
/// Datasets are built up table by table and written to disk once, after
/// which they are only ever read.
///
/// ```rust
/// # use nucdata_store::{Dataset, ReferenceStore, Table};
/// # use serde::{Deserialize, Serialize};
/// #[derive(Serialize, Deserialize, Debug, PartialEq)]
/// struct Mass {
///     nuc: u32,
///     mass: f64,
/// }
///
/// let rows = vec![Mass { nuc: 10010000, mass: 1.00782503 }];
///
/// let mut dataset = Dataset::new();
/// dataset.insert(Table::AtomicMass, &rows).unwrap();
///
/// let read: Vec<Mass> = dataset.read_table(Table::AtomicMass).unwrap();
/// assert_eq!(read, rows);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Dataset {
    tables: BTreeMap<String, Vec<u8>>,
}

impl Dataset {
    /// An empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a full table of records, replacing any existing table
    pub fn insert<R: Serialize>(&mut self, table: Table, rows: &[R]) -> Result<()> {
        let bytes = bincode::serialize(rows)?;
        self.tables.insert(table.path().to_string(), bytes);
        Ok(())
    }

    /// Builder style version of [Dataset::insert()]
    pub fn with_table<R: Serialize>(mut self, table: Table, rows: &[R]) -> Result<Self> {
        self.insert(table, rows)?;
        Ok(self)
    }

    /// Check if the dataset has a table
    pub fn contains(&self, table: Table) -> bool {
        self.tables.contains_key(table.path())
    }

    /// Paths of all tables in the dataset
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(|k| k.as_str())
    }

    /// Read a dataset file into memory
    ///
    /// Fails with [Error::DatasetNotFound] if there is no file at `path`, and
    /// [Error::WrongFormat] if the file is not a dataset.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut reader = BufReader::new(File::open(path)?);
        let wrong_format = |reason: String| Error::WrongFormat {
            path: path.to_path_buf(),
            reason,
        };

        // check the header before trusting any lengths in the body
        let header: Header = bincode::deserialize_from(&mut reader)
            .map_err(|_| wrong_format("file too short for header".to_string()))?;

        if header.magic != MAGIC {
            return Err(wrong_format("missing magic bytes".to_string()));
        }

        if header.version != FORMAT_VERSION {
            return Err(wrong_format(nucdata_utils::f!(
                "unsupported version {}",
                header.version
            )));
        }

        let tables: BTreeMap<String, Vec<u8>> =
            bincode::deserialize_from(&mut reader).map_err(|e| wrong_format(e.to_string()))?;

        debug!("Opened {} with {} tables", path.display(), tables.len());
        Ok(Self { tables })
    }

    /// Write the dataset to a file
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        let header = Header {
            magic: MAGIC,
            version: FORMAT_VERSION,
        };
        bincode::serialize_into(&mut writer, &header)?;
        bincode::serialize_into(&mut writer, &self.tables)?;
        Ok(())
    }
}

impl ReferenceStore for Dataset {
    fn read_table<R: DeserializeOwned>(&self, table: Table) -> Result<Vec<R>> {
        let bytes = self
            .tables
            .get(table.path())
            .ok_or_else(|| Error::MissingTable {
                table: table.path().to_string(),
            })?;

        // the table path stands in for a file path in memory
        bincode::deserialize(bytes).map_err(|e| Error::WrongFormat {
            path: PathBuf::from(table.path()),
            reason: nucdata_utils::f!("rows do not match the record layout, {e}"),
        })
    }
}

/// A dataset file on disk
///
/// Nothing is held open. Every read opens and validates the file, decodes the
/// requested table, and closes it again, so a file that is missing now can
/// still be picked up by a later read.
///
/// ```rust, no_run
/// # use nucdata_store::{DatasetFile, ReferenceStore, Table};
/// // Path from the NUCDATA_PATH environment variable, or nuc_data.bin
/// let store = DatasetFile::from_env();
///
/// // Explicit path
/// let store = DatasetFile::new("/path/to/nuc_data.bin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFile {
    path: PathBuf,
}

impl DatasetFile {
    /// Refer to a dataset file at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Refer to the dataset file given by the environment
    ///
    /// See [data_path()](crate::data_path) for how the path is resolved.
    pub fn from_env() -> Self {
        Self { path: data_path() }
    }

    /// Path to the dataset file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReferenceStore for DatasetFile {
    fn read_table<R: DeserializeOwned>(&self, table: Table) -> Result<Vec<R>> {
        debug!("Reading {table} from {}", self.path.display());
        Dataset::open(&self.path)?
            .read_table(table)
            .map_err(|e| match e {
                Error::WrongFormat { reason, .. } => Error::WrongFormat {
                    path: self.path.clone(),
                    reason: nucdata_utils::f!("{table}: {reason}"),
                },
                e => e,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Row {
        nuc: u32,
        value: f64,
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(nucdata_utils::f!(
            "nucdata-store-{}-{name}",
            std::process::id()
        ))
    }

    #[test]
    fn missing_table() {
        let dataset = Dataset::new();
        let result = dataset.read_table::<Row>(Table::Alphas);
        assert!(matches!(result, Err(Error::MissingTable { .. })));
    }

    #[test]
    fn file_round_trip() {
        let path = temp_path("round_trip.bin");
        let rows = vec![
            Row {
                nuc: 270600000,
                value: 59.9338,
            },
            Row {
                nuc: 922350000,
                value: 235.0439,
            },
        ];

        Dataset::new()
            .with_table(Table::AtomicMass, &rows)
            .unwrap()
            .write(&path)
            .unwrap();

        let store = DatasetFile::new(&path);
        let read: Vec<Row> = store.read_table(Table::AtomicMass).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(read, rows);
    }

    #[derive(Deserialize, Debug)]
    #[allow(dead_code)]
    struct WideRow {
        nuc: u32,
        value: f64,
        error: f64,
        abund: f64,
    }

    #[test]
    fn mismatched_rows_in_memory() {
        let rows = vec![Row {
            nuc: 10010000,
            value: 1.00782503,
        }];
        let dataset = Dataset::new().with_table(Table::AtomicMass, &rows).unwrap();

        let result = dataset.read_table::<WideRow>(Table::AtomicMass);
        assert!(matches!(result, Err(Error::WrongFormat { .. })));
    }

    #[test]
    fn mismatched_rows_on_disk() {
        let path = temp_path("mismatched_rows.bin");
        let rows = vec![Row {
            nuc: 10010000,
            value: 1.00782503,
        }];

        Dataset::new()
            .with_table(Table::AtomicMass, &rows)
            .unwrap()
            .write(&path)
            .unwrap();

        let result = DatasetFile::new(&path).read_table::<WideRow>(Table::AtomicMass);
        std::fs::remove_file(&path).unwrap();

        match result {
            Err(Error::WrongFormat { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected a format error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file() {
        let store = DatasetFile::new(temp_path("does_not_exist.bin"));
        let result = store.read_table::<Row>(Table::AtomicMass);
        assert!(matches!(result, Err(Error::DatasetNotFound { .. })));
    }

    #[test]
    fn not_a_dataset() {
        let path = temp_path("not_a_dataset.txt");
        std::fs::write(&path, "nuc,mass\n922350000,235.0439\n").unwrap();

        let result = DatasetFile::new(&path).read_table::<Row>(Table::AtomicMass);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::WrongFormat { .. })));
    }
}
