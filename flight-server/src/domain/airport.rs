//! Airport code types.

use std::fmt;

/// Error returned when parsing an invalid IATA code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA code: {reason}")]
pub struct InvalidIata {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// IATA location codes are always 3 uppercase ASCII letters. This type
/// guarantees that any `Iata` value is valid by construction, so the
/// buffer table and region buckets can key on it without re-checking.
///
/// # Examples
///
/// ```
/// use flight_server::domain::Iata;
///
/// let scl = Iata::parse("SCL").unwrap();
/// assert_eq!(scl.as_str(), "SCL");
///
/// // User input can be normalized first
/// assert_eq!(Iata::parse_normalized(" scl ").unwrap(), scl);
///
/// // Wrong shapes are rejected
/// assert!(Iata::parse("SC").is_err());
/// assert!(Iata::parse("SCLX").is_err());
/// assert!(Iata::parse("sc1").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iata([u8; 3]);

impl Iata {
    /// Parse an IATA code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidIata> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidIata {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidIata {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(Iata([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse user input, trimming whitespace and uppercasing first.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidIata> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: only valid ASCII uppercase letters are stored
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iata({})", self.as_str())
    }
}

impl fmt::Display for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Parsing then rendering returns the original string.
        #[test]
        fn roundtrip(s in "[A-Z]{3}") {
            let code = Iata::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Normalization agrees with parsing the cleaned string.
        #[test]
        fn normalized_matches_parse(s in "[A-Za-z]{3}") {
            let normalized = Iata::parse_normalized(&s).unwrap();
            let direct = Iata::parse(&s.to_ascii_uppercase()).unwrap();
            prop_assert_eq!(normalized, direct);
        }

        /// Anything that is not exactly 3 uppercase letters is rejected.
        #[test]
        fn wrong_shape_rejected(s in "[A-Z]{0,2}|[A-Z]{4,8}|[a-z0-9]{3}") {
            prop_assert!(Iata::parse(&s).is_err());
        }
    }
}
