// standard library
use std::path::{Path, PathBuf};

// external crates
use log::debug;
use serde::de::DeserializeOwned;

// internal modules
use crate::error::{Error, Result};
use crate::store::ReferenceStore;
use crate::table::Table;

/// A directory of CSV files, one per table
///
/// Each table is read from a file named after its path, so `/decay/gammas`
/// is expected at `<root>/decay/gammas.csv`. The header row must name the
/// record fields.
///
/// ```text
/// root/
/// ├── atomic_mass.csv
/// ├── decay/
/// │   ├── gammas.csv
/// │   └── half_life.csv
/// └── neutron/
///     └── scattering_lengths.csv
/// ```
///
/// ```rust, no_run
/// # use nucdata_store::{CsvStore, ReferenceStore, Table};
/// # use serde::Deserialize;
/// #[derive(Deserialize)]
/// struct Mass {
///     nuc: u32,
///     mass: f64,
/// }
///
/// let store = CsvStore::new("/path/to/tables");
/// let masses: Vec<Mass> = store.read_table(Table::AtomicMass).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvStore {
    root: PathBuf,
}

impl CsvStore {
    /// Refer to a directory of CSV tables
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory of the tables
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Expected location of a table file
    pub fn table_path(&self, table: Table) -> PathBuf {
        self.root.join(table.file_name("csv"))
    }
}

impl ReferenceStore for CsvStore {
    fn read_table<R: DeserializeOwned>(&self, table: Table) -> Result<Vec<R>> {
        if !self.root.is_dir() {
            return Err(Error::DatasetNotFound {
                path: self.root.clone(),
            });
        }

        let path = self.table_path(table);
        if !path.is_file() {
            return Err(Error::MissingTable {
                table: table.path().to_string(),
            });
        }

        debug!("Reading {table} from {}", path.display());
        let mut reader = csv::Reader::from_path(&path)?;

        reader
            .deserialize()
            .collect::<core::result::Result<Vec<R>, csv::Error>>()
            .map_err(|e| Error::WrongFormat {
                path: path.clone(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Alpha {
        energy: f64,
        intensity: f64,
        from_nuc: u32,
        to_nuc: u32,
    }

    fn temp_root(name: &str) -> PathBuf {
        std::env::temp_dir().join(nucdata_utils::f!(
            "nucdata-csv-{}-{name}",
            std::process::id()
        ))
    }

    #[test]
    fn reads_nested_table() {
        let root = temp_root("nested");
        std::fs::create_dir_all(root.join("decay")).unwrap();
        std::fs::write(
            root.join("decay/alphas.csv"),
            "energy,intensity,from_nuc,to_nuc\n\
             5156.59,70.77,942390000,922350001\n\
             5144.3,17.11,942390000,922350002\n",
        )
        .unwrap();

        let rows: Vec<Alpha> = CsvStore::new(&root).read_table(Table::Alphas).unwrap();
        std::fs::remove_dir_all(&root).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].energy, 5144.3);
        assert_eq!(rows[1].to_nuc, 922350002);
    }

    #[test]
    fn missing_directory() {
        let store = CsvStore::new(temp_root("does_not_exist"));
        let result = store.read_table::<Alpha>(Table::Alphas);
        assert!(matches!(result, Err(Error::DatasetNotFound { .. })));
    }

    #[test]
    fn missing_file() {
        let root = temp_root("empty");
        std::fs::create_dir_all(&root).unwrap();

        let result = CsvStore::new(&root).read_table::<Alpha>(Table::Alphas);
        std::fs::remove_dir_all(&root).unwrap();

        assert!(matches!(result, Err(Error::MissingTable { .. })));
    }

    #[test]
    fn bad_rows() {
        let root = temp_root("bad_rows");
        std::fs::create_dir_all(root.join("decay")).unwrap();
        std::fs::write(
            root.join("decay/alphas.csv"),
            "energy,intensity\nnot-a-number,1.0\n",
        )
        .unwrap();

        let result = CsvStore::new(&root).read_table::<Alpha>(Table::Alphas);
        std::fs::remove_dir_all(&root).unwrap();

        assert!(matches!(result, Err(Error::WrongFormat { .. })));
    }
}
