//! Set of useful parser combinators

// external crates
use log::warn;

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{alpha1, one_of};
use nom::combinator::{eof, opt, value};
use nom::error::{Error, ErrorKind};
use nom::{self, Err, IResult};

/// Components of a nuclide name before any validation
#[derive(Debug, PartialEq)]
pub(crate) struct ParsedNuclide<'a> {
    pub symbol: &'a str,
    pub isotope: Option<u32>,
    pub state: u32,
}

/// Parse string into the components of a nuclide name
///
/// Can be:
///     - Element only Co, C
///     - Isotope Co60, C12
///     - Metastable Co60m1 Co60m2 Co60m3 ...
///     - Fispact Co60m Co60n Co60o
///
/// Full is <element><separator><isotope><metastable>
///
/// Allow separators between <element> and <isotope>
/// Must enforce element first because things like 104mn are ambiguous, i.e.
/// Mn-104 or N-104m?
pub(crate) fn nuclide_from_str(i: &str) -> IResult<&str, ParsedNuclide> {
    let (i, symbol) = element(i)?;
    let (i, _) = opt(separator)(i)?;
    let (i, isotope) = opt(isotope)(i)?;

    // Only look for a metastable tag if it follows an isotope number
    let (i, state) = match isotope {
        Some(_) => metastable(i)?,
        None => (i, 0),
    };

    Ok((
        i,
        ParsedNuclide {
            symbol,
            isotope,
            state,
        },
    ))
}

/// Get the element symbol
fn element(i: &str) -> IResult<&str, &str> {
    let (i, element) = alpha1(i)?;

    if element.len() > 2 {
        Err(Err::Error(Error::new(i, ErrorKind::Fail)))
    } else {
        Ok((i, element))
    }
}

/// Get the mass number
fn isotope(i: &str) -> IResult<&str, u32> {
    nom::character::complete::u32(i)
}

/// List of possible separators people may use
fn separator(i: &str) -> IResult<&str, char> {
    one_of("_-")(i)
}

/// Get the excited state from a range of possible formats and conventions
fn metastable(i: &str) -> IResult<&str, u32> {
    let (i, state) = opt(alt((numbered_isomer, symbol_isomer)))(i)?;

    if state.is_none() && !i.is_empty() {
        warn!("Unable to infer isomer from \"{i}\"");
    }

    Ok((i, state.unwrap_or(0)))
}

/// Get the state from the usual ENSDF formats m1, m2, etc...
fn numbered_isomer(i: &str) -> IResult<&str, u32> {
    let (i, _) = one_of("mM")(i)?;
    nom::character::complete::u32(i)
}

/// Get the state from known fispact/common use symbols
///
/// No guarantee these line up with the level numbering of any particular
/// decay library, they are taken as the first, second, and third excited
/// states.
fn symbol_isomer(i: &str) -> IResult<&str, u32> {
    let (i, state) = alt((
        value(0, tag_no_case("g")),
        value(1, tag_no_case("m")),
        value(1, tag_no_case("*")),
        value(2, tag_no_case("n")),
        value(3, tag_no_case("o")),
    ))(i)?;

    // a lone symbol must be the end of the name
    let (i, _) = eof(i)?;
    Ok((i, state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_only() {
        let (rest, parsed) = nuclide_from_str("Fe").unwrap();
        assert_eq!(rest, "");
        assert_eq!(
            parsed,
            ParsedNuclide {
                symbol: "Fe",
                isotope: None,
                state: 0
            }
        );
    }

    #[test]
    fn fispact_states() {
        for (name, expected) in [("Co60m", 1), ("Co60n", 2), ("Co60o", 3), ("Co60*", 1)] {
            let (_, parsed) = nuclide_from_str(name).unwrap();
            assert_eq!(parsed.state, expected, "{name}");
        }
    }

    #[test]
    fn numbered_states() {
        let (rest, parsed) = nuclide_from_str("eu-152m2").unwrap();
        assert_eq!(rest, "");
        assert_eq!(parsed.isotope, Some(152));
        assert_eq!(parsed.state, 2);
    }

    #[test]
    fn unknown_state_is_left_over() {
        let (rest, parsed) = nuclide_from_str("Co60x").unwrap();
        assert_eq!(rest, "x");
        assert_eq!(parsed.state, 0);
    }

    #[test]
    fn long_symbols_fail() {
        assert!(nuclide_from_str("Cob60").is_err());
    }
}
