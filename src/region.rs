use core::fmt;
use std::str::FromStr;

use anyhow::bail;

use crate::LocationRecord;

/// A two-letter state code such as `FL`, always stored upper-case.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Region([u8; 2]);

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0] as char, self.0[1] as char)
    }
}

impl FromStr for Region {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().as_bytes() {
            &[a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Ok(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => bail!("Invalid region code: {s}"),
        }
    }
}

impl Region {
    /// Prefix of this region's menu file names, e.g. `fl` in `fl_123_menu.json`.
    pub fn prefix(&self) -> String {
        self.to_string().to_ascii_lowercase()
    }

    pub fn contains(&self, location: &LocationRecord) -> bool {
        location
            .state
            .as_deref()
            .is_some_and(|x| x.as_bytes() == self.0)
    }

    pub fn filter<'a>(
        self,
        locations: &'a [LocationRecord],
    ) -> impl Iterator<Item = &'a LocationRecord> + 'a {
        locations.iter().filter(move |x| self.contains(x))
    }
}
