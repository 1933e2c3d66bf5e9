//! `nucdata` is a set of libraries for fast, memoized access to nuclear
//! reference data
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of workspace crates.
#[doc(inline)]
pub use nucdata_utils as utils;

#[cfg(feature = "lookup")]
#[cfg_attr(docsrs, doc(cfg(feature = "lookup")))]
#[doc(inline)]
pub use nucdata_lookup as lookup;

#[cfg(feature = "nucname")]
#[cfg_attr(docsrs, doc(cfg(feature = "nucname")))]
#[doc(inline)]
pub use nucdata_nucname as nucname;

#[cfg(feature = "store")]
#[cfg_attr(docsrs, doc(cfg(feature = "store")))]
#[doc(inline)]
pub use nucdata_store as store;
