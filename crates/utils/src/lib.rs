//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, capitalising element symbols or using floats as ordered map
//! keys are useful across all of the nucdata crates.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod real;
mod string_ext;

// Flatten
pub use real::Real;
pub use string_ext::StringExt;
