use serde::{Deserialize, Serialize};

use crate::decode::Legs;
use crate::figure::Figure;
use crate::model::Element;

/// Cross-system references of an Odu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Correspondences {
    /// Position in the traditional order, 1 to 256.
    pub rank: u16,
    /// King Wen number of the associated Yi Jing hexagram, 1 to 64.
    pub hexagram_yi_jing: u8,
    /// Index of the associated geomantic figure, 0 to 15.
    pub geomancy: u8,
}

/// The authored content of an Odu, everything that is not derived from
/// its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryText {
    pub meaning: String,
    pub proverbs: Vec<String>,
    pub ese_ifa_verses: Vec<String>,
    pub orisha: String,
    pub prescriptions: String,
    pub interdictions: String,
    pub element: Element,
}

/// One of the 256 Odu.
///
/// `number`, `binary_signature`, `name` and `is_principal` all follow from
/// the two legs; [`CompositeEntry::new`] derives them so a freshly composed
/// entry can never disagree with its key. Entries deserialized from outside
/// sources are checked by [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeEntry {
    pub number: u8,
    pub binary_signature: String,
    pub name: String,
    pub right_leg: Figure,
    pub left_leg: Figure,
    pub is_principal: bool,
    pub meaning: String,
    pub proverbs: Vec<String>,
    pub ese_ifa_verses: Vec<String>,
    pub orisha: String,
    pub prescriptions: String,
    pub interdictions: String,
    pub element: Element,
    pub correspondences: Correspondences,
}

impl CompositeEntry {
    #[must_use]
    pub fn new(legs: Legs, text: EntryText, correspondences: Correspondences) -> Self {
        let number = legs.number();
        Self {
            number,
            binary_signature: binary_signature(number),
            name: legs.name(),
            right_leg: legs.right,
            left_leg: legs.left,
            is_principal: legs.is_principal(),
            meaning: text.meaning,
            proverbs: text.proverbs,
            ese_ifa_verses: text.ese_ifa_verses,
            orisha: text.orisha,
            prescriptions: text.prescriptions,
            interdictions: text.interdictions,
            element: text.element,
            correspondences,
        }
    }

    #[must_use]
    pub const fn legs(&self) -> Legs {
        Legs::new(self.right_leg, self.left_leg)
    }

    #[must_use]
    pub const fn rank(&self) -> u16 {
        self.correspondences.rank
    }
}

/// The 8-character binary expansion of a key, bit 7 first.
#[must_use]
pub fn binary_signature(number: u8) -> String {
    format!("{number:08b}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_text() -> EntryText {
        EntryText {
            meaning: "Sens".to_string(),
            proverbs: vec!["Un".to_string(), "Deux".to_string(), "Trois".to_string()],
            ese_ifa_verses: vec!["Vers".to_string()],
            orisha: "Esu".to_string(),
            prescriptions: "Offrir".to_string(),
            interdictions: "Ne pas".to_string(),
            element: Element::Air,
        }
    }

    fn sample_correspondences() -> Correspondences {
        Correspondences {
            rank: 17,
            hexagram_yi_jing: 12,
            geomancy: 15,
        }
    }

    #[test]
    fn test_binary_signature() {
        assert_eq!(binary_signature(0), "00000000");
        assert_eq!(binary_signature(255), "11111111");
        assert_eq!(binary_signature(5), "00000101");
        assert_eq!(binary_signature(240), "11110000");
    }

    #[test]
    fn test_new_derives_identity_from_legs() {
        let entry = CompositeEntry::new(
            Legs::new(Figure::Ogbe, Figure::Oyeku),
            sample_text(),
            sample_correspondences(),
        );
        assert_eq!(entry.number, 240);
        assert_eq!(entry.binary_signature, "11110000");
        assert_eq!(entry.name, "Ogbe-Oyeku");
        assert!(!entry.is_principal);
        assert_eq!(entry.legs(), Legs::split(240));
        assert_eq!(entry.rank(), 17);
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let entry = CompositeEntry::new(
            Legs::meji(Figure::Ogbe),
            sample_text(),
            sample_correspondences(),
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["binarySignature"], "11111111");
        assert_eq!(json["eseIfaVerses"][0], "Vers");
        assert_eq!(json["rightLeg"], "Ogbe");
        assert_eq!(json["correspondences"]["hexagramYiJing"], 12);
        assert_eq!(json["isPrincipal"], true);
    }
}
