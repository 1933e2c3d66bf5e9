//! Memoized lookup of nuclear reference data
//!
//! Atomic masses, abundances, scattering lengths, decay data, fission yields,
//! level schemes, and emission lines, all behind one [NuclearData] context.
//!
//! ```rust, no_run
//! # use nucdata_lookup::{FissionSource, NuclearData};
//! # use nucdata_nucname::Nucid;
//! let data = NuclearData::from_env();
//!
//! let co60: Nucid = "Co60".parse().unwrap();
//! let u235: Nucid = "U235".parse().unwrap();
//! let cs137: Nucid = "Cs137".parse().unwrap();
//!
//! let mass = data.atomic_mass(co60);
//! let lambda = data.decay_const(co60).unwrap();
//! let gammas = data.gamma_energy(co60).unwrap();
//! let fy = data.fpyield(u235, cs137, FissionSource::Thermal, false).unwrap();
//! ```
//!
//! ## Loading and estimates
//!
//! Every quantity is cached in its own [CacheTable]. Nothing is read until a
//! lookup misses an empty table, at which point the whole reference table is
//! loaded once. Anything still missing afterwards is handled per quantity:
//!
//! | Quantity                 | Missing value                           | Remembered |
//! | ------------------------ | --------------------------------------- | ---------- |
//! | Atomic mass              | ground state mass, else mass number     | yes        |
//! | Natural abundance        | ground state abundance, else 0.0        | yes        |
//! | Scattering lengths       | same A, else same Z, else zero          | yes        |
//! | Decay constant, branches | 0.0, no children                        | yes        |
//! | Fission yields           | 0.0                                     | yes        |
//! | Decay channels, levels   | 0.0 or `None`                           | no         |
//! | Emission lines           | empty list                              | no         |
//!
//! ## Errors
//!
//! Only atomic mass and natural abundance hide a reference table that fails
//! to load. They log a warning and estimate instead. Every other quantity
//! returns the [Error], and the load is tried again on the next lookup.

// Modules
mod cache;
mod data;
mod decay;
mod emission;
mod error;
mod fission;
mod levels;
mod mass;
mod records;
mod scattering;

#[doc(inline)]
pub use cache::{CacheTable, LoadGuard, LoadPolicy, Project};

#[doc(inline)]
pub use data::NuclearData;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use fission::FissionSource;

#[doc(inline)]
pub use records::*;
