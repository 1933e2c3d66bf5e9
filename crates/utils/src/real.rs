use serde::{Deserialize, Serialize};

/// A totally ordered `f64` for use in ordered map keys
///
/// The float primitives do not implement `Ord` due to `NaN` being
/// incomparable, so they can not be used directly as `BTreeMap` keys.
///
/// This wrapper uses `total_cmp` to always produce an ordering in accordance
/// to the totalOrder predicate as defined in the IEEE 754 (2008 revision)
/// floating point standard.
///
/// ```rust
/// # use nucdata_utils::Real;
/// let mut energies = vec![Real(1332.5), Real(-0.0), Real(0.0), Real(1173.2)];
/// energies.sort();
/// assert_eq!(energies, vec![Real(-0.0), Real(0.0), Real(1173.2), Real(1332.5)]);
/// ```
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Real(pub f64);

impl Real {
    /// Lowest possible key, below every finite value
    pub const MIN: Real = Real(f64::NEG_INFINITY);

    /// Highest possible key, above every finite value
    pub const MAX: Real = Real(f64::INFINITY);

    /// The wrapped value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0).is_eq()
    }
}

impl Eq for Real {}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Real {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Real(value)
    }
}

impl std::fmt::Display for Real {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_zero_is_distinct() {
        assert!(Real(-0.0) < Real(0.0));
        assert_ne!(Real(-0.0), Real(0.0));
    }

    #[test]
    fn bounds_contain_finite_values() {
        for value in [f64::MIN, -1.0, 0.0, 1.0e30, f64::MAX] {
            assert!(Real::MIN < Real(value));
            assert!(Real(value) < Real::MAX);
        }
    }
}
