//! Byte decoding: one byte in, two legs out.
//!
//! The high nibble is the right leg (first parent) and the low nibble is the
//! left leg (second parent). Swapping them renames every composite, so the
//! convention is fixed here and nowhere else.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::figure::Figure;

/// The two parent figures of a composite Odu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Legs {
    pub right: Figure,
    pub left: Figure,
}

impl Legs {
    #[must_use]
    pub const fn new(right: Figure, left: Figure) -> Self {
        Self { right, left }
    }

    /// A doubled pair, i.e. a principal Meji.
    #[must_use]
    pub const fn meji(figure: Figure) -> Self {
        Self::new(figure, figure)
    }

    /// Split a byte into its legs. Infallible: every `u8` is a valid key.
    #[must_use]
    pub const fn split(byte: u8) -> Self {
        Self {
            right: Figure::from_bits(byte >> 4),
            left: Figure::from_bits(byte & 0x0F),
        }
    }

    /// The composite key, `(right << 4) | left`.
    #[must_use]
    pub const fn number(self) -> u8 {
        (self.right.bits() << 4) | self.left.bits()
    }

    #[must_use]
    pub fn is_principal(self) -> bool {
        self.right == self.left
    }

    /// Composite name: `"<P> Meji"` for doubled legs, `"<Right>-<Left>"`
    /// otherwise.
    #[must_use]
    pub fn name(self) -> String {
        if self.is_principal() {
            format!("{} Meji", self.right.name())
        } else {
            format!("{}-{}", self.right.name(), self.left.name())
        }
    }

    /// Draw both legs side by side as they are read from the tray: the right
    /// leg in the right-hand column, the left leg in the left-hand column.
    #[must_use]
    pub fn render(self) -> String {
        let right = self.right.marks();
        let left = self.left.marks();
        left.iter()
            .zip(right.iter())
            .map(|(l, r)| format!("{:>2}   {:<2}", l, r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Legs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<u8> for Legs {
    fn from(byte: u8) -> Self {
        Self::split(byte)
    }
}

impl From<Legs> for u8 {
    fn from(legs: Legs) -> Self {
        legs.number()
    }
}

impl FromStr for Legs {
    type Err = Error;

    /// Parse a composite name.
    ///
    /// Accepts `"Ogbe Meji"`, `"Eji Ogbe"`, `"Ogbe-Oyeku"` and
    /// `"Ogbe Oyeku"`, ignoring case and surrounding whitespace. Each part
    /// may use any spelling [`Figure`] accepts.
    fn from_str(s: &str) -> Result<Self> {
        let unknown = || Error::UnknownOdu(s.trim().to_string());
        let words: Vec<&str> = s
            .split(|c: char| c == '-' || c.is_whitespace())
            .filter(|w| !w.is_empty())
            .collect();

        match words.as_slice() {
            [figure, meji] if meji.eq_ignore_ascii_case("meji") => {
                figure.parse().map(Self::meji).map_err(|_| unknown())
            }
            [eji, figure] if eji.eq_ignore_ascii_case("eji") => {
                figure.parse().map(Self::meji).map_err(|_| unknown())
            }
            [right, left] => {
                let right = right.parse().map_err(|_| unknown())?;
                let left = left.parse().map_err(|_| unknown())?;
                Ok(Self::new(right, left))
            }
            _ => Err(unknown()),
        }
    }
}

/// Decode an integer supplied by the byte source.
///
/// Values outside `0..=255` are a contract violation by the supplier and
/// surface as [`Error::OutOfRange`].
pub fn decode(value: i64) -> Result<Legs> {
    let byte = u8::try_from(value).map_err(|_| Error::OutOfRange { value })?;
    Ok(Legs::split(byte))
}

/// Parse a decimal, `0x` hexadecimal or `0b` binary integer, as a byte
/// source might print it. Range is not checked here; see [`decode`].
///
/// Well-formed integers too large for `i64` saturate to `i64::MAX` or
/// `i64::MIN`, so they still decode to [`Error::OutOfRange`] rather than
/// being mistaken for a name.
pub fn parse_integer(s: &str) -> Option<i64> {
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        (bin, 2)
    } else {
        (s, 10)
    };
    match i64::from_str_radix(digits, radix) {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
