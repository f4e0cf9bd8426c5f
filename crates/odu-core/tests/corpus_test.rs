//! Properties of the built-in corpus, checked through the public API only.

use std::collections::{BTreeSet, HashSet};

use odu_core::figure::PRIMITIVE_FIGURES;
use odu_core::{decode, validate, Error, Figure, Repository};

#[test]
fn test_decode_then_resolve_returns_the_keyed_entry() {
    let repo = Repository::global();
    for b in 0..=255i64 {
        let legs = decode(b).unwrap();
        let entry = repo.resolve_legs(legs);
        assert_eq!(i64::from(entry.number), b);
    }
}

#[test]
fn test_binary_signature_matches_number() {
    for entry in Repository::global() {
        assert_eq!(entry.binary_signature, format!("{:08b}", entry.number));
        assert_eq!(entry.binary_signature.len(), 8);
    }
}

#[test]
fn test_numbers_are_exactly_zero_to_255() {
    let numbers: BTreeSet<u8> = Repository::global().iter().map(|e| e.number).collect();
    assert_eq!(numbers.len(), 256);
    assert_eq!(numbers, (0..=255u8).collect());
}

#[test]
fn test_ranks_are_a_bijection_onto_1_to_256() {
    let ranks: BTreeSet<u16> = Repository::global().iter().map(|e| e.rank()).collect();
    assert_eq!(ranks, (1..=256u16).collect());
}

#[test]
fn test_principal_entries_have_identical_nibbles() {
    let principal: Vec<u8> = Repository::global()
        .iter()
        .filter(|e| e.is_principal)
        .map(|e| e.number)
        .collect();
    assert_eq!(
        principal,
        vec![0, 17, 34, 51, 68, 85, 102, 119, 136, 153, 170, 187, 204, 221, 238, 255]
    );
    for number in principal {
        assert_eq!(number >> 4, number & 0x0F);
    }
}

#[test]
fn test_principal_entries_rank_first() {
    for entry in Repository::global().principals() {
        assert!((1..=16).contains(&entry.rank()), "{}", entry.name);
    }
}

#[test]
fn test_naming_rule() {
    let names: HashSet<&str> = PRIMITIVE_FIGURES.iter().map(|p| p.name).collect();
    for entry in Repository::global() {
        if entry.is_principal {
            assert!(entry.name.ends_with(" Meji"), "{}", entry.name);
            let base = entry.name.trim_end_matches(" Meji");
            assert_eq!(base, entry.right_leg.name());
        } else {
            let parts: Vec<&str> = entry.name.split('-').collect();
            assert_eq!(parts.len(), 2, "{}", entry.name);
            assert_ne!(parts[0], parts[1]);
            assert!(names.contains(parts[0]) && names.contains(parts[1]));
        }
    }
}

#[test]
fn test_legs_reconstruct_the_key() {
    for entry in Repository::global() {
        let key = (entry.right_leg.bits() << 4) | entry.left_leg.bits();
        assert_eq!(key, entry.number, "{}", entry.name);
    }
}

#[test]
fn test_content_shape() {
    for entry in Repository::global() {
        assert!(!entry.meaning.is_empty());
        assert!(!entry.orisha.is_empty());
        assert!(!entry.prescriptions.is_empty());
        assert!(!entry.interdictions.is_empty());
        if entry.is_principal {
            assert!(entry.proverbs.len() >= 3);
            assert_eq!(entry.ese_ifa_verses.len(), 3);
        } else {
            assert_eq!(entry.proverbs.len(), 3);
            assert_eq!(entry.ese_ifa_verses.len(), 1);
        }
    }
}

#[test]
fn test_meanings_are_unique() {
    let meanings: HashSet<&str> = Repository::global()
        .iter()
        .map(|e| e.meaning.as_str())
        .collect();
    assert_eq!(meanings.len(), 256);
}

#[test]
fn test_correspondence_ranges() {
    for entry in Repository::global() {
        let c = entry.correspondences;
        assert!((1..=64).contains(&c.hexagram_yi_jing), "{}", entry.name);
        assert!(c.geomancy <= 15, "{}", entry.name);
    }
}

#[test]
fn test_validator_accepts_builtin_corpus() {
    assert!(validate::check(Repository::global().entries()).is_empty());
}

#[test]
fn test_byte_255_is_ogbe_meji() {
    let entry = odu_core::resolve(255).unwrap();
    assert_eq!(entry.number, 255);
    assert_eq!(entry.name, "Ogbe Meji");
    assert_eq!(entry.binary_signature, "11111111");
    assert_eq!(entry.correspondences.rank, 1);
}

#[test]
fn test_byte_0_is_oyeku_meji() {
    let entry = odu_core::resolve(0).unwrap();
    assert_eq!(entry.number, 0);
    assert_eq!(entry.name, "Oyeku Meji");
    assert_eq!(entry.binary_signature, "00000000");
    assert_eq!(entry.correspondences.rank, 2);
}

#[test]
fn test_byte_240_is_ogbe_oyeku() {
    let legs = decode(240).unwrap();
    assert_eq!(legs.right, Figure::Ogbe);
    assert_eq!(legs.right.bits(), 0b1111);
    assert_eq!(legs.left, Figure::Oyeku);
    assert_eq!(legs.left.bits(), 0b0000);
    assert_eq!(odu_core::resolve(240).unwrap().name, "Ogbe-Oyeku");
}

#[test]
fn test_byte_15_is_oyeku_ogbe() {
    let legs = decode(15).unwrap();
    assert_eq!(legs.right, Figure::Oyeku);
    assert_eq!(legs.left, Figure::Ogbe);
    let entry = odu_core::resolve(15).unwrap();
    assert_eq!(entry.name, "Oyeku-Ogbe");
    assert_ne!(entry.name, odu_core::resolve(240).unwrap().name);
}

#[test]
fn test_out_of_range_input() {
    for value in [-1, 256, 1024, i64::MIN, i64::MAX] {
        assert!(
            matches!(odu_core::resolve(value), Err(Error::OutOfRange { .. })),
            "{value}"
        );
    }
}

#[test]
fn test_shared_across_threads() {
    let handles: Vec<_> = (0..4u8)
        .map(|t| {
            std::thread::spawn(move || {
                let repo = Repository::global();
                (0..64u8)
                    .map(|i| repo.get(t * 64 + i).number)
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let mut seen: Vec<u8> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..=255u8).collect::<Vec<_>>());
}
