//! Read-only reference stores for tabulated nuclear data
//!
//! The lookup layer never cares where its data come from, only that a named
//! [Table] can be read as a sequence of fixed-layout records. Anything that
//! does this implements [ReferenceStore].
//!
//! Three stores are provided:
//!
//! | Store         | Backing                              |
//! | ------------- | ------------------------------------ |
//! | [Dataset]     | in-memory tables                     |
//! | [DatasetFile] | binary dataset file, read on demand  |
//! | [CsvStore]    | directory with one CSV file per table|
//!
//! ## Errors
//!
//! Failing to find the dataset at all is kept distinct from finding something
//! that is not a dataset, and from a dataset that lacks a table:
//!
//! - [Error::DatasetNotFound]
//! - [Error::WrongFormat]
//! - [Error::MissingTable]
//!
//! ## Building datasets
//!
//! A binary dataset is written from memory with [Dataset::write()].
//!
//! ```rust, no_run
//! # use nucdata_store::{Dataset, Table};
//! # let masses: Vec<(u32, f64)> = vec![];
//! # let gammas: Vec<(u32, f64)> = vec![];
//! Dataset::new()
//!     .with_table(Table::AtomicMass, &masses)
//!     .unwrap()
//!     .with_table(Table::Gammas, &gammas)
//!     .unwrap()
//!     .write("nuc_data.bin")
//!     .unwrap();
//! ```

// Modules
mod csv_store;
mod dataset;
mod error;
mod store;
mod table;

#[doc(inline)]
pub use csv_store::CsvStore;

#[doc(inline)]
pub use dataset::{Dataset, DatasetFile};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use store::{data_path, ReferenceStore, DATA_PATH_VAR, DEFAULT_DATA_PATH};

#[doc(inline)]
pub use table::Table;
