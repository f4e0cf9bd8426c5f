//! The sixteen primitive figures (parent Odu).
//!
//! Each figure is a column of four marks. A single stroke `I` is a 1 and a
//! double stroke `II` is a 0; marks are read top to bottom, so the first
//! mark is the most significant bit of the figure's 4-bit pattern.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A primitive figure, identified by its 4-bit mark pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Figure {
    Oyeku = 0b0000,
    Okanran = 0b0001,
    Oturupon = 0b0010,
    Owonrin = 0b0011,
    Ika = 0b0100,
    Ofun = 0b0101,
    Iwori = 0b0110,
    Osa = 0b0111,
    Obara = 0b1000,
    Odi = 0b1001,
    Ose = 0b1010,
    Otura = 0b1011,
    Irosun = 0b1100,
    Irete = 0b1101,
    Ogunda = 0b1110,
    Ogbe = 0b1111,
}

/// A row of the primitive figure table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrimitiveFigure {
    pub figure: Figure,
    /// The 4-bit mark pattern (0-15).
    pub bits: u8,
    /// Canonical name, unique across the table.
    pub name: &'static str,
    /// Short gloss used to build composite meanings.
    pub theme: &'static str,
}

/// The primitive figure table, indexed by bit pattern.
pub static PRIMITIVE_FIGURES: [PrimitiveFigure; 16] = [
    primitive(Figure::Oyeku, "Oyeku", "le mystère, la mort et la renaissance"),
    primitive(Figure::Okanran, "Okanran", "la parole franche et le conflit ouvert"),
    primitive(Figure::Oturupon, "Oturupon", "la maladie, la guérison et l'endurance"),
    primitive(Figure::Owonrin, "Owonrin", "le renversement et l'imprévu"),
    primitive(Figure::Ika, "Ika", "la prudence et le pouvoir contenu"),
    primitive(Figure::Ofun, "Ofun", "la pureté et la bénédiction des anciens"),
    primitive(Figure::Iwori, "Iwori", "la réflexion et la vision intérieure"),
    primitive(Figure::Osa, "Osa", "le vent du changement et la fuite"),
    primitive(Figure::Obara, "Obara", "la richesse soudaine et l'orgueil"),
    primitive(Figure::Odi, "Odi", "la matrice, la fidélité et la protection"),
    primitive(Figure::Ose, "Ose", "la douceur, la fertilité et la victoire"),
    primitive(Figure::Otura, "Otura", "la paix de l'esprit et la sagesse"),
    primitive(Figure::Irosun, "Irosun", "la mémoire des ancêtres et la vigilance"),
    primitive(Figure::Irete, "Irete", "la ténacité et la terre qui nourrit"),
    primitive(Figure::Ogunda, "Ogunda", "le fer qui ouvre la voie"),
    primitive(Figure::Ogbe, "Ogbe", "la lumière et la prospérité"),
];

const fn primitive(figure: Figure, name: &'static str, theme: &'static str) -> PrimitiveFigure {
    PrimitiveFigure {
        figure,
        bits: figure as u8,
        name,
        theme,
    }
}

/// Seniority order of the sixteen principal Odu, most senior first.
pub const TRADITIONAL_ORDER: [Figure; 16] = [
    Figure::Ogbe,
    Figure::Oyeku,
    Figure::Iwori,
    Figure::Odi,
    Figure::Irosun,
    Figure::Owonrin,
    Figure::Obara,
    Figure::Okanran,
    Figure::Ogunda,
    Figure::Osa,
    Figure::Ika,
    Figure::Oturupon,
    Figure::Otura,
    Figure::Irete,
    Figure::Ose,
    Figure::Ofun,
];

/// Regional spellings accepted when parsing a figure name.
const ALIASES: &[(&str, Figure)] = &[
    ("Eyeunle", Figure::Ogbe),
    ("Oyekun", Figure::Oyeku),
    ("Idi", Figure::Odi),
    ("Iroso", Figure::Irosun),
    ("Owanrin", Figure::Owonrin),
    ("Okana", Figure::Okanran),
    ("Ogun", Figure::Ogunda),
    ("Otrupon", Figure::Oturupon),
    ("Ofu", Figure::Ofun),
    ("Orangun", Figure::Ofun),
];

impl Figure {
    /// All figures in bit-pattern order.
    pub const ALL: [Self; 16] = [
        Self::Oyeku,
        Self::Okanran,
        Self::Oturupon,
        Self::Owonrin,
        Self::Ika,
        Self::Ofun,
        Self::Iwori,
        Self::Osa,
        Self::Obara,
        Self::Odi,
        Self::Ose,
        Self::Otura,
        Self::Irosun,
        Self::Irete,
        Self::Ogunda,
        Self::Ogbe,
    ];

    /// Resolve a 4-bit pattern. Only the low nibble of `bits` is considered,
    /// so the lookup is total.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0x0F) as usize]
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn primitive(self) -> &'static PrimitiveFigure {
        &PRIMITIVE_FIGURES[self as usize]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.primitive().name
    }

    #[must_use]
    pub fn theme(self) -> &'static str {
        self.primitive().theme
    }

    /// Zero-based position in [`TRADITIONAL_ORDER`].
    #[must_use]
    pub fn seniority(self) -> usize {
        TRADITIONAL_ORDER
            .iter()
            .position(|&f| f == self)
            .unwrap_or(TRADITIONAL_ORDER.len())
    }

    /// The four marks, top to bottom.
    #[must_use]
    pub const fn marks(self) -> [Mark; 4] {
        let bits = self.bits();
        [
            Mark::from_bit(bits & 0b1000 != 0),
            Mark::from_bit(bits & 0b0100 != 0),
            Mark::from_bit(bits & 0b0010 != 0),
            Mark::from_bit(bits & 0b0001 != 0),
        ]
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Figure {
    type Err = Error;

    /// Parse a canonical name or a known regional spelling, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        PRIMITIVE_FIGURES
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(s))
            .map(|p| p.figure)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(s))
                    .map(|&(_, figure)| figure)
            })
            .ok_or_else(|| Error::UnknownFigure(s.to_string()))
    }
}

/// One mark of a figure, as drawn on the divining tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// A single stroke, bit value 1.
    Single,
    /// A double stroke, bit value 0.
    Double,
}

impl Mark {
    #[must_use]
    pub const fn from_bit(set: bool) -> Self {
        if set {
            Self::Single
        } else {
            Self::Double
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "I",
            Self::Double => "II",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_indexed_by_bits() {
        for (index, row) in PRIMITIVE_FIGURES.iter().enumerate() {
            assert_eq!(usize::from(row.bits), index);
            assert_eq!(row.figure.bits(), row.bits);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = PRIMITIVE_FIGURES.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), 16);
    }

    #[test]
    fn test_from_bits_is_total() {
        for bits in 0..16u8 {
            assert_eq!(Figure::from_bits(bits).bits(), bits);
        }
        assert_eq!(Figure::from_bits(0xF0), Figure::Oyeku);
    }

    #[test]
    fn test_canonical_patterns() {
        assert_eq!(Figure::Ogbe.bits(), 0b1111);
        assert_eq!(Figure::Oyeku.bits(), 0b0000);
        assert_eq!(Figure::Iwori.bits(), 0b0110);
        assert_eq!(Figure::Odi.bits(), 0b1001);
    }

    #[test]
    fn test_traditional_order_covers_every_figure() {
        let seen: HashSet<Figure> = TRADITIONAL_ORDER.iter().copied().collect();
        assert_eq!(seen.len(), 16);
        assert_eq!(Figure::Ogbe.seniority(), 0);
        assert_eq!(Figure::Oyeku.seniority(), 1);
        assert_eq!(Figure::Ofun.seniority(), 15);
    }

    #[test]
    fn test_marks() {
        assert_eq!(Figure::Ogbe.marks(), [Mark::Single; 4]);
        assert_eq!(
            Figure::Irosun.marks(),
            [Mark::Single, Mark::Single, Mark::Double, Mark::Double]
        );
        assert_eq!(Mark::Double.to_string(), "II");
    }

    #[test]
    fn test_parse_canonical_and_alias() {
        assert_eq!("ogbe".parse::<Figure>().unwrap(), Figure::Ogbe);
        assert_eq!(" OSA ".parse::<Figure>().unwrap(), Figure::Osa);
        assert_eq!("Okana".parse::<Figure>().unwrap(), Figure::Okanran);
        assert!(matches!(
            "Ogbeyonu".parse::<Figure>(),
            Err(Error::UnknownFigure(_))
        ));
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(format!("{:<6}|", Figure::Osa), "Osa   |");
    }
}
