use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Elemental classification of an Odu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Feu,
    Eau,
    Air,
    Terre,
}

impl Element {
    pub const ALL: [Self; 4] = [Self::Feu, Self::Eau, Self::Air, Self::Terre];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feu => "Feu",
            Self::Eau => "Eau",
            Self::Air => "Air",
            Self::Terre => "Terre",
        }
    }

    const fn english(self) -> &'static str {
        match self {
            Self::Feu => "fire",
            Self::Eau => "water",
            Self::Air => "air",
            Self::Terre => "earth",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Element {
    type Err = Error;

    /// Accepts the French label or its English equivalent, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s) || e.english().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownElement(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_parse() {
        assert_eq!("feu".parse::<Element>().unwrap(), Element::Feu);
        assert_eq!("Water".parse::<Element>().unwrap(), Element::Eau);
        assert_eq!("TERRE".parse::<Element>().unwrap(), Element::Terre);
        assert!("ether".parse::<Element>().is_err());
    }

    #[test]
    fn test_element_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Element::Air).unwrap(), "\"Air\"");
    }
}
