//! User-entered postcodes.

use std::fmt;

/// A postcode with all whitespace removed.
///
/// No format validation is done; unknown or malformed postcodes are
/// reported by the lookup API itself.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Postcode(String);

impl Postcode {
    /// Strip every whitespace character from raw user input.
    ///
    /// Returns `None` when nothing is left.
    ///
    /// # Examples
    ///
    /// ```
    /// use nearest_stops::domain::Postcode;
    ///
    /// let pc = Postcode::sanitize(" SW1A 1AA\n").unwrap();
    /// assert_eq!(pc.as_str(), "SW1A1AA");
    ///
    /// assert!(Postcode::sanitize(" \t\n").is_none());
    /// ```
    pub fn sanitize(input: &str) -> Option<Self> {
        let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        if cleaned.is_empty() {
            None
        } else {
            Some(Self(cleaned))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Postcode({})", self.0)
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
