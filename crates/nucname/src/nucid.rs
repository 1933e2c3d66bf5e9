// external crates
use serde::{Deserialize, Serialize};

// nucdata modules
use nucdata_utils::{f, StringExt};

// internal modules
use crate::elements::{symbol_from_znum, znum_from_symbol};
use crate::error::{Error, Result};
use crate::parsers::{nuclide_from_str, ParsedNuclide};

const Z_FACTOR: u32 = 10_000_000;
const A_FACTOR: u32 = 10_000;

/// Canonical integer identifier for a nuclide
///
/// The identifier is laid out as `ZZZAAASSSS`, i.e.
///
/// ```text
/// id = Z * 10_000_000 + A * 10_000 + S
/// ```
///
/// where `Z` is the atomic number, `A` the mass number, and `S` the excited
/// state. Natural elements use `A = 0`.
///
/// Identifiers are totally ordered, and every excited state of a (Z, A) pair
/// sorts directly after its ground state within a block of 10,000 ids.
///
/// ```rust
/// # use nucdata_nucname::Nucid;
/// let u235m = Nucid::from_parts(92, 235, 1).unwrap();
///
/// assert_eq!(u235m.id(), 922350001);
/// assert_eq!(u235m.znum(), 92);
/// assert_eq!(u235m.anum(), 235);
/// assert_eq!(u235m.state(), 1);
/// assert_eq!(u235m.ground_state(), Nucid(922350000));
/// ```
///
/// String and raw buffer references are converted through the `FromStr` and
/// `TryFrom` implementations.
///
/// ```rust
/// # use nucdata_nucname::Nucid;
/// let a: Nucid = "U-235m1".parse().unwrap();
/// let b = Nucid::try_from(&b"u235m\0\0"[..]).unwrap();
/// let c = Nucid::try_from(922350001_u32).unwrap();
///
/// assert_eq!(a, b);
/// assert_eq!(b, c);
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Nucid(pub u32);

impl Nucid {
    /// Smallest possible identifier
    pub const MIN: Nucid = Nucid(u32::MIN);

    /// Largest possible identifier
    pub const MAX: Nucid = Nucid(u32::MAX);

    /// Compose an identifier from atomic number, mass number, and state
    ///
    /// Fails for unknown elements, mass numbers above 999, mass numbers
    /// below Z (other than the natural element `A = 0`), or states above 9999.
    pub fn from_parts(z: u32, a: u32, state: u32) -> Result<Nucid> {
        let id = z
            .saturating_mul(Z_FACTOR)
            .saturating_add(a.saturating_mul(A_FACTOR))
            .saturating_add(state);

        let valid = symbol_from_znum(z).is_some()
            && a < 1000
            && (a == 0 || a >= z)
            && state < A_FACTOR
            && (a != 0 || state == 0);

        match valid {
            true => Ok(Nucid(id)),
            false => Err(Error::InvalidId(id)),
        }
    }

    /// Convert from the legacy `zzaaam` integer form
    ///
    /// ```rust
    /// # use nucdata_nucname::Nucid;
    /// assert_eq!(Nucid::from_zzaaam(952421).unwrap(), Nucid(952420001));
    /// ```
    pub fn from_zzaaam(zzaaam: u32) -> Result<Nucid> {
        Nucid::from_parts(zzaaam / 10_000, (zzaaam / 10) % 1000, zzaaam % 10)
    }

    /// The raw integer identifier
    pub fn id(self) -> u32 {
        self.0
    }

    /// Atomic number (Z)
    pub fn znum(self) -> u32 {
        self.0 / Z_FACTOR
    }

    /// Mass number (A)
    pub fn anum(self) -> u32 {
        (self.0 / A_FACTOR) % 1000
    }

    /// Excited state number, 0 for the ground state
    pub fn state(self) -> u32 {
        self.0 % A_FACTOR
    }

    /// The identifier with the state field cleared
    pub fn ground_state(self) -> Nucid {
        Nucid((self.0 / A_FACTOR) * A_FACTOR)
    }

    /// Whether the state field is non-zero
    pub fn is_excited(self) -> bool {
        self.state() != 0
    }

    /// Whether this refers to a natural element rather than an isotope
    pub fn is_element(self) -> bool {
        self.anum() == 0
    }

    /// Last identifier in the 10,000-wide block shared with the ground state
    ///
    /// The block is cut short at [Nucid::MAX] for the very last ids.
    pub fn last_in_block(self) -> Nucid {
        Nucid(self.ground_state().0.saturating_add(A_FACTOR - 1))
    }

    /// A name for the nuclide with consistent formatting
    ///
    /// Formatted as `<element><mass number><state>`, falling back to the raw
    /// integer when the atomic number is not a known element.
    ///
    /// ```rust
    /// # use nucdata_nucname::Nucid;
    /// assert_eq!(Nucid(270600000).name(), "Co60");
    /// assert_eq!(Nucid(952420001).name(), "Am242m1");
    /// assert_eq!(Nucid(260000000).name(), "Fe");
    /// ```
    pub fn name(self) -> String {
        let Some(symbol) = symbol_from_znum(self.znum()) else {
            return self.0.to_string();
        };

        match (self.anum(), self.state()) {
            (0, _) => symbol.to_string(),
            (a, 0) => f!("{symbol}{a}"),
            (a, s) => f!("{symbol}{a}m{s}"),
        }
    }
}

impl std::fmt::Display for Nucid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Nucid> for u32 {
    fn from(nuc: Nucid) -> Self {
        nuc.0
    }
}

impl TryFrom<u32> for Nucid {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self> {
        let nuc = Nucid(id);
        Nucid::from_parts(nuc.znum(), nuc.anum(), nuc.state()).map_err(|_| Error::InvalidId(id))
    }
}

impl TryFrom<&[u8]> for Nucid {
    type Error = Error;

    fn try_from(buffer: &[u8]) -> Result<Self> {
        std::str::from_utf8(buffer)?.trim_nul().parse()
    }
}

impl TryFrom<&str> for Nucid {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl std::str::FromStr for Nucid {
    type Err = Error;

    /// Parse names, canonical ids, or legacy `zzaaam` ids
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        // purely numeric ids, canonical ids are always at least 8 digits
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            let value: u32 = s.parse().map_err(|_| Error::ParseError(s.to_string()))?;
            return match s.len() >= 8 {
                true => Nucid::try_from(value),
                false => Nucid::from_zzaaam(value),
            };
        }

        let (remainder, parsed) =
            nuclide_from_str(s).map_err(|_| Error::ParseError(s.to_string()))?;

        if !remainder.is_empty() {
            return Err(Error::ParseError(s.to_string()));
        }

        let ParsedNuclide {
            symbol,
            isotope,
            state,
        } = parsed;

        let z = znum_from_symbol(symbol)
            .ok_or_else(|| Error::UnknownElement(symbol.capitalise()))?;
        Nucid::from_parts(z, isotope.unwrap_or(0), state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("H1", 10010000)]
    #[case("Co60", 270600000)]
    #[case("co-60", 270600000)]
    #[case("U_235", 922350000)]
    #[case("u235m", 922350001)]
    #[case("Am242m1", 952420001)]
    #[case("Am242M2", 952420002)]
    #[case("Eu152n", 631520002)]
    #[case("Tc99m0", 430990000)]
    #[case("Tc99g", 430990000)]
    #[case("Fe", 260000000)]
    #[case("922350000", 922350000)]
    #[case("952421", 952420001)]
    #[case(" Pu239 ", 942390000)]
    fn parse_valid_names(#[case] name: &str, #[case] expected: u32) {
        assert_eq!(name.parse::<Nucid>().unwrap(), Nucid(expected));
    }

    #[rstest]
    #[case("")]
    #[case("Xx60")]
    #[case("Uranium235")]
    #[case("U235q")]
    #[case("U1")]
    #[case("9999")]
    fn parse_invalid_names(#[case] name: &str) {
        assert!(name.parse::<Nucid>().is_err());
    }

    #[test]
    fn unknown_element_is_reported() {
        assert_eq!(
            "Xx60".parse::<Nucid>(),
            Err(Error::UnknownElement("Xx".to_string()))
        );
    }

    #[test]
    fn components() {
        let nuc = Nucid(952420003);
        assert_eq!(nuc.znum(), 95);
        assert_eq!(nuc.anum(), 242);
        assert_eq!(nuc.state(), 3);
        assert!(nuc.is_excited());
        assert!(!nuc.ground_state().is_excited());
        assert_eq!(nuc.last_in_block(), Nucid(952429999));
    }

    #[test]
    fn last_block_stops_at_max() {
        assert_eq!(Nucid::MAX.last_in_block(), Nucid::MAX);
        assert_eq!(Nucid(4294960000).last_in_block(), Nucid::MAX);
        assert!(Nucid::MAX.ground_state() <= Nucid::MAX.last_in_block());
    }

    #[test]
    fn raw_buffers() {
        assert_eq!(Nucid::try_from(&b"Co60\0"[..]), Ok(Nucid(270600000)));
        assert!(Nucid::try_from(&[0xff_u8, 0xfe][..]).is_err());
    }

    #[test]
    fn validated_integers() {
        assert!(Nucid::try_from(922350000_u32).is_ok());
        assert_eq!(Nucid::try_from(5_u32), Err(Error::InvalidId(5)));
        assert!(Nucid::try_from(1_190_000_000_u32).is_err());
    }

    #[test]
    fn names_round_trip() {
        for name in ["H1", "Co60", "Am242m1", "Fe", "Og294"] {
            assert_eq!(name.parse::<Nucid>().unwrap().name(), name);
        }
    }
}
