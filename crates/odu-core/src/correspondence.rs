//! Cross-system correspondences: traditional rank, Yi Jing hexagram and
//! geomantic figure.
//!
//! The rank follows the seniority table in [`crate::figure::TRADITIONAL_ORDER`]
//! and is not a function of the byte value. Hexagram and geomancy are read
//! off the marks of the two legs.

use crate::decode::Legs;
use crate::figure::Figure;
use crate::model::Correspondences;

/// Number of Odu, and the highest rank.
pub const ODU_COUNT: u16 = 256;

/// King Wen sequence, indexed `[upper][lower]` by trigram pattern.
///
/// A trigram pattern holds the bottom line in bit 2 and the top line in
/// bit 0, a solid (yang) line being 1.
const KING_WEN: [[u8; 8]; 8] = [
    [2, 15, 7, 46, 24, 36, 19, 11],
    [23, 52, 4, 18, 27, 22, 41, 26],
    [8, 39, 29, 48, 3, 63, 60, 5],
    [20, 53, 59, 57, 42, 37, 61, 9],
    [16, 62, 40, 32, 51, 55, 54, 34],
    [35, 56, 64, 50, 21, 30, 38, 14],
    [45, 31, 47, 28, 17, 49, 58, 43],
    [12, 33, 6, 44, 25, 13, 10, 1],
];

/// Latin names of the sixteen geomantic figures, indexed by pattern
/// (a single point is 1, head line first).
const GEOMANTIC_FIGURES: [&str; 16] = [
    "Populus",
    "Tristitia",
    "Albus",
    "Fortuna Major",
    "Rubeus",
    "Acquisitio",
    "Conjunctio",
    "Caput Draconis",
    "Laetitia",
    "Carcer",
    "Amissio",
    "Puella",
    "Fortuna Minor",
    "Puer",
    "Cauda Draconis",
    "Via",
];

/// Position of an Odu in the traditional order.
///
/// The sixteen Meji take ranks 1 to 16 by seniority. Every other Odu is
/// grouped under its right leg, groups following seniority, and ordered
/// within the group by the seniority of its left leg.
pub fn traditional_rank(legs: Legs) -> u16 {
    let right = legs.right.seniority();
    let left = legs.left.seniority();
    let rank = if legs.is_principal() {
        right + 1
    } else {
        let offset = if left > right { left - 1 } else { left };
        17 + right * 15 + offset
    };
    rank as u16
}

/// The trigram formed by the first three marks of a figure, the first mark
/// becoming the bottom line.
const fn trigram(figure: Figure) -> usize {
    (figure.bits() >> 1) as usize
}

/// King Wen number of the hexagram built from the right leg (lower trigram)
/// and the left leg (upper trigram).
pub const fn hexagram(legs: Legs) -> u8 {
    KING_WEN[trigram(legs.left)][trigram(legs.right)]
}

/// The geomantic sum of the two legs: line by line, two points of the same
/// parity give an even line.
pub const fn geomancy(legs: Legs) -> u8 {
    legs.right.bits() ^ legs.left.bits()
}

/// Latin name of a geomantic figure index. Only the low nibble is used.
pub fn geomantic_name(index: u8) -> &'static str {
    GEOMANTIC_FIGURES[usize::from(index & 0x0F)]
}

pub fn correspondences(legs: Legs) -> Correspondences {
    Correspondences {
        rank: traditional_rank(legs),
        hexagram_yi_jing: hexagram(legs),
        geomancy: geomancy(legs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_king_wen_is_a_permutation() {
        let numbers: HashSet<u8> = KING_WEN.iter().flatten().copied().collect();
        assert_eq!(numbers.len(), 64);
        assert!(numbers.iter().all(|n| (1..=64).contains(n)));
    }

    #[test]
    fn test_pure_hexagrams() {
        assert_eq!(hexagram(Legs::meji(Figure::Ogbe)), 1);
        assert_eq!(hexagram(Legs::meji(Figure::Oyeku)), 2);
        // Water over thunder: Zhun, Difficulty at the Beginning.
        assert_eq!(
            hexagram(Legs::new(Figure::Obara, Figure::Ika)),
            3
        );
    }

    #[test]
    fn test_geomantic_sum() {
        assert_eq!(geomancy(Legs::meji(Figure::Osa)), 0);
        assert_eq!(geomantic_name(geomancy(Legs::meji(Figure::Osa))), "Populus");
        assert_eq!(geomancy(Legs::new(Figure::Ogbe, Figure::Oyeku)), 15);
        assert_eq!(geomantic_name(15), "Via");
    }

    #[test]
    fn test_principal_ranks() {
        assert_eq!(traditional_rank(Legs::meji(Figure::Ogbe)), 1);
        assert_eq!(traditional_rank(Legs::meji(Figure::Oyeku)), 2);
        assert_eq!(traditional_rank(Legs::meji(Figure::Ofun)), 16);
    }

    #[test]
    fn test_derived_ranks() {
        assert_eq!(traditional_rank(Legs::new(Figure::Ogbe, Figure::Oyeku)), 17);
        assert_eq!(traditional_rank(Legs::new(Figure::Ogbe, Figure::Ofun)), 31);
        assert_eq!(traditional_rank(Legs::new(Figure::Oyeku, Figure::Ogbe)), 32);
        assert_eq!(traditional_rank(Legs::new(Figure::Oyeku, Figure::Iwori)), 33);
        assert_eq!(traditional_rank(Legs::new(Figure::Ofun, Figure::Ose)), 256);
    }

    #[test]
    fn test_ranks_form_a_permutation() {
        let ranks: HashSet<u16> = (0..=255u8)
            .map(|b| traditional_rank(Legs::split(b)))
            .collect();
        assert_eq!(ranks.len(), 256);
        assert_eq!(ranks.iter().min(), Some(&1));
        assert_eq!(ranks.iter().max(), Some(&ODU_COUNT));
    }
}
