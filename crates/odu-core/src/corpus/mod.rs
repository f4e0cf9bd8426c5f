//! The built-in corpus of 256 Odu.
//!
//! Principal entries come from [`meji`]; the 240 others are composed by
//! [`amulu`] from the vocabulary of their legs in [`lexicon`].

pub mod amulu;
pub mod lexicon;
pub mod meji;

use crate::correspondence::correspondences;
use crate::decode::Legs;
use crate::model::{CompositeEntry, EntryText};

pub use lexicon::Lexicon;
pub use meji::MejiText;

/// Build all 256 entries, ordered by key.
pub fn entries() -> Vec<CompositeEntry> {
    (0..=u8::MAX)
        .map(|byte| {
            let legs = Legs::split(byte);
            CompositeEntry::new(legs, text(legs), correspondences(legs))
        })
        .collect()
}

/// The text of a single Odu.
pub fn text(legs: Legs) -> EntryText {
    if legs.is_principal() {
        principal_text(legs)
    } else {
        amulu::compose(legs)
    }
}

fn principal_text(legs: Legs) -> EntryText {
    let authored = MejiText::of(legs.right);
    let lexicon = Lexicon::of(legs.right);
    EntryText {
        meaning: authored.meaning.to_string(),
        proverbs: authored.proverbs.iter().map(|p| (*p).to_string()).collect(),
        ese_ifa_verses: authored.verses.iter().map(|v| (*v).to_string()).collect(),
        orisha: lexicon.orisha.to_string(),
        prescriptions: authored.prescriptions.to_string(),
        interdictions: authored.interdictions.to_string(),
        element: lexicon.element,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Figure;
    use crate::model::Element;

    #[test]
    fn test_entries_are_keyed_in_order() {
        let entries = entries();
        assert_eq!(entries.len(), 256);
        for (index, entry) in entries.iter().enumerate() {
            assert_eq!(usize::from(entry.number), index);
        }
    }

    #[test]
    fn test_principal_text_uses_authored_prose() {
        let text = text(Legs::meji(Figure::Ose));
        assert!(text.meaning.starts_with("Ose Meji"));
        assert_eq!(text.orisha, "Osun");
        assert_eq!(text.element, Element::Eau);
        assert_eq!(text.ese_ifa_verses.len(), 3);
    }
}
