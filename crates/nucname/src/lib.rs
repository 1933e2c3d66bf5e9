//! Canonical nuclide identifiers
//!
//! Every nuclear data table is keyed by a single integer form of the nuclide,
//! the [Nucid]. This crate converts the many ways people write nuclides into
//! that form and pulls the atomic number, mass number, and state back out.
//!
//! ```rust
//! # use nucdata_nucname::Nucid;
//! // All of these refer to the first excited state of Am-242
//! let ids: Vec<Nucid> = ["Am242m1", "am-242m", "AM_242M1", "952420001", "952421"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! assert!(ids.iter().all(|id| id.id() == 952420001));
//! ```
//!
//! ## Name formats
//!
//! Names are expected as `<element><separator><isotope><metastable>`, where
//! only the element is required. For example:
//!
//! - Element only `Co`, `C`
//! - Isotope `Co60`, `C12`, `co-60`, `Co_60`
//! - Metastable `Co60m1`, `Co60m2`, ...
//! - FISPACT-II style `Co60m`, `Co60n`, `Co60o`
//!
//! The element must come first because something like "104mn" is ambiguous.
//!
//! Purely numeric strings are read as canonical ids when at least 8 digits
//! long, otherwise as the legacy `zzaaam` form.

// Modules
mod elements;
mod error;
mod nucid;
mod parsers;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use nucid::Nucid;
