//! Integrity checks over a set of entries.
//!
//! The built-in corpus is proven by the test suite; these checks exist for
//! corpora loaded from outside (an exported JSON file edited by hand, for
//! instance) and for the tests themselves.

use std::collections::HashMap;
use thiserror::Error;

use crate::correspondence::ODU_COUNT;
use crate::figure::Figure;
use crate::model::{binary_signature, CompositeEntry};

/// Proverbs and verses a derived entry carries.
const DERIVED_PROVERBS: usize = 3;
const DERIVED_VERSES: usize = 1;
/// Principal entries carry at least this many proverbs.
const PRINCIPAL_MIN_PROVERBS: usize = 3;
const PRINCIPAL_VERSES: usize = 3;

/// One violation of the corpus invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityIssue {
    #[error("expected {expected} entries, found {found}")]
    WrongCount { expected: usize, found: usize },

    #[error("no entry for key {0}")]
    MissingKey(u8),

    #[error("key {number} appears {count} times")]
    DuplicateKey { number: u8, count: usize },

    #[error("entry {number}: binary signature {found:?} should be {expected:?}")]
    SignatureMismatch {
        number: u8,
        expected: String,
        found: String,
    },

    #[error("entry {number}: legs {right}-{left} compose to key {composed}")]
    LegMismatch {
        number: u8,
        right: Figure,
        left: Figure,
        composed: u8,
    },

    #[error("entry {number}: name {found:?} should be {expected:?}")]
    NameMismatch {
        number: u8,
        expected: String,
        found: String,
    },

    #[error("entry {number}: principal flag is {found} but legs say {expected}")]
    PrincipalMismatch {
        number: u8,
        expected: bool,
        found: bool,
    },

    #[error("entry {number}: rank {rank} is outside 1..=256")]
    RankOutOfRange { number: u8, rank: u16 },

    #[error("rank {rank} is shared by {count} entries")]
    DuplicateRank { rank: u16, count: usize },

    #[error("rank {0} is not assigned")]
    MissingRank(u16),

    #[error("entry {number}: principal entry has rank {rank}, outside 1..=16")]
    PrincipalRank { number: u8, rank: u16 },

    #[error("entry {number}: hexagram {hexagram} is outside 1..=64")]
    HexagramOutOfRange { number: u8, hexagram: u8 },

    #[error("entry {number}: geomancy {geomancy} is outside 0..=15")]
    GeomancyOutOfRange { number: u8, geomancy: u8 },

    #[error("entry {number}: expected {expected} {what}, found {found}")]
    ContentShape {
        number: u8,
        what: &'static str,
        expected: String,
        found: usize,
    },

    #[error("entry {number}: meaning is identical to entry {other}")]
    DuplicateMeaning { number: u8, other: u8 },
}

/// Check every corpus invariant and return all violations found.
///
/// An empty result means the entries form a complete, consistent corpus.
pub fn check(entries: &[CompositeEntry]) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    check_keys(entries, &mut issues);
    check_ranks(entries, &mut issues);
    for entry in entries {
        check_identity(entry, &mut issues);
        check_correspondences(entry, &mut issues);
        check_content(entry, &mut issues);
    }
    check_meanings(entries, &mut issues);

    for issue in &issues {
        log::warn!("integrity: {}", issue);
    }
    log::debug!(
        "checked {} entries, {} issue(s)",
        entries.len(),
        issues.len()
    );
    issues
}

fn check_keys(entries: &[CompositeEntry], issues: &mut Vec<IntegrityIssue>) {
    let expected = usize::from(ODU_COUNT);
    if entries.len() != expected {
        issues.push(IntegrityIssue::WrongCount {
            expected,
            found: entries.len(),
        });
    }

    let mut counts = [0usize; 256];
    for entry in entries {
        counts[usize::from(entry.number)] += 1;
    }
    for (number, &count) in (0..=u8::MAX).zip(counts.iter()) {
        match count {
            0 => issues.push(IntegrityIssue::MissingKey(number)),
            1 => {}
            _ => issues.push(IntegrityIssue::DuplicateKey { number, count }),
        }
    }
}

fn check_ranks(entries: &[CompositeEntry], issues: &mut Vec<IntegrityIssue>) {
    let mut counts: HashMap<u16, usize> = HashMap::new();
    for entry in entries {
        let rank = entry.rank();
        if rank == 0 || rank > ODU_COUNT {
            issues.push(IntegrityIssue::RankOutOfRange {
                number: entry.number,
                rank,
            });
            continue;
        }
        if entry.is_principal && rank > 16 {
            issues.push(IntegrityIssue::PrincipalRank {
                number: entry.number,
                rank,
            });
        }
        *counts.entry(rank).or_default() += 1;
    }

    for rank in 1..=ODU_COUNT {
        match counts.get(&rank).copied().unwrap_or(0) {
            0 => issues.push(IntegrityIssue::MissingRank(rank)),
            1 => {}
            count => issues.push(IntegrityIssue::DuplicateRank { rank, count }),
        }
    }
}

fn check_identity(entry: &CompositeEntry, issues: &mut Vec<IntegrityIssue>) {
    let number = entry.number;
    let legs = entry.legs();

    let expected = binary_signature(number);
    if entry.binary_signature != expected {
        issues.push(IntegrityIssue::SignatureMismatch {
            number,
            expected,
            found: entry.binary_signature.clone(),
        });
    }

    let composed = legs.number();
    if composed != number {
        issues.push(IntegrityIssue::LegMismatch {
            number,
            right: legs.right,
            left: legs.left,
            composed,
        });
    }

    let expected = legs.name();
    if entry.name != expected {
        issues.push(IntegrityIssue::NameMismatch {
            number,
            expected,
            found: entry.name.clone(),
        });
    }

    if entry.is_principal != legs.is_principal() {
        issues.push(IntegrityIssue::PrincipalMismatch {
            number,
            expected: legs.is_principal(),
            found: entry.is_principal,
        });
    }
}

fn check_correspondences(entry: &CompositeEntry, issues: &mut Vec<IntegrityIssue>) {
    let c = entry.correspondences;
    if !(1..=64).contains(&c.hexagram_yi_jing) {
        issues.push(IntegrityIssue::HexagramOutOfRange {
            number: entry.number,
            hexagram: c.hexagram_yi_jing,
        });
    }
    if c.geomancy > 15 {
        issues.push(IntegrityIssue::GeomancyOutOfRange {
            number: entry.number,
            geomancy: c.geomancy,
        });
    }
}

fn check_content(entry: &CompositeEntry, issues: &mut Vec<IntegrityIssue>) {
    let number = entry.number;
    let proverbs = entry.proverbs.len();
    let verses = entry.ese_ifa_verses.len();

    if entry.is_principal {
        if proverbs < PRINCIPAL_MIN_PROVERBS {
            issues.push(IntegrityIssue::ContentShape {
                number,
                what: "proverbs",
                expected: format!("at least {PRINCIPAL_MIN_PROVERBS}"),
                found: proverbs,
            });
        }
        if verses != PRINCIPAL_VERSES {
            issues.push(IntegrityIssue::ContentShape {
                number,
                what: "verses",
                expected: PRINCIPAL_VERSES.to_string(),
                found: verses,
            });
        }
    } else {
        if proverbs != DERIVED_PROVERBS {
            issues.push(IntegrityIssue::ContentShape {
                number,
                what: "proverbs",
                expected: DERIVED_PROVERBS.to_string(),
                found: proverbs,
            });
        }
        if verses != DERIVED_VERSES {
            issues.push(IntegrityIssue::ContentShape {
                number,
                what: "verses",
                expected: DERIVED_VERSES.to_string(),
                found: verses,
            });
        }
    }
}

fn check_meanings(entries: &[CompositeEntry], issues: &mut Vec<IntegrityIssue>) {
    let mut seen: HashMap<&str, u8> = HashMap::with_capacity(entries.len());
    for entry in entries {
        if let Some(&other) = seen.get(entry.meaning.as_str()) {
            issues.push(IntegrityIssue::DuplicateMeaning {
                number: entry.number,
                other,
            });
        } else {
            seen.insert(&entry.meaning, entry.number);
        }
    }
}
