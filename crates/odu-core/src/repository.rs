//! Keyed access to the 256 Odu.
//!
//! The built-in repository is assembled once per process on first use and
//! shared by reference afterwards; it is never mutated.
//!
//! # Example
//!
//! ```
//! use odu_core::{Figure, Legs, Repository};
//!
//! let repo = Repository::global();
//! let entry = repo.resolve_legs(Legs::new(Figure::Oyeku, Figure::Ogbe));
//! assert_eq!(entry.number, 15);
//! assert_eq!(repo.by_rank(1).map(|e| e.name.as_str()), Some("Ogbe Meji"));
//! ```

use std::path::Path;
use std::sync::LazyLock;

use crate::corpus;
use crate::decode::{decode, parse_integer, Legs};
use crate::error::{Error, Result};
use crate::model::{CompositeEntry, Element};
use crate::validate;

static BUILTIN: LazyLock<Repository> = LazyLock::new(Repository::builtin);

/// A complete, read-only set of 256 entries.
#[derive(Debug, Clone)]
pub struct Repository {
    /// Indexed by key.
    entries: Vec<CompositeEntry>,
    /// Keys in rank order.
    ranked: Vec<u8>,
}

impl Repository {
    /// The built-in corpus.
    pub fn global() -> &'static Self {
        &BUILTIN
    }

    fn builtin() -> Self {
        let repo = Self::index(corpus::entries());
        log::debug!("built-in corpus ready with {} entries", repo.len());
        repo
    }

    /// Assemble a repository from externally supplied entries.
    ///
    /// Entries may arrive in any order. Any violation of the corpus
    /// invariants is returned as [`Error::DataIntegrity`].
    pub fn from_entries(mut entries: Vec<CompositeEntry>) -> Result<Self> {
        let issues = validate::check(&entries);
        if !issues.is_empty() {
            return Err(Error::DataIntegrity(issues));
        }
        entries.sort_by_key(|e| e.number);
        Ok(Self::index(entries))
    }

    /// Load and validate a JSON array of entries.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let entries: Vec<CompositeEntry> = serde_json::from_str(&content)?;
        log::debug!("read {} entries from {}", entries.len(), path.display());
        Self::from_entries(entries)
    }

    /// Write every entry, in rank order, as a pretty-printed JSON array.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        let ranked: Vec<&CompositeEntry> = self.iter_ranked().collect();
        Ok(serde_json::to_string_pretty(&ranked)?)
    }

    fn index(entries: Vec<CompositeEntry>) -> Self {
        let mut ranked: Vec<u8> = entries.iter().map(|e| e.number).collect();
        ranked.sort_by_key(|&n| entries[usize::from(n)].rank());
        Self { entries, ranked }
    }

    /// The entry for a key. Total: every byte has an entry.
    pub fn get(&self, byte: u8) -> &CompositeEntry {
        &self.entries[usize::from(byte)]
    }

    /// Decode a value from the byte source and return its entry.
    pub fn resolve(&self, value: i64) -> Result<&CompositeEntry> {
        let legs = decode(value)?;
        let entry = self.resolve_legs(legs);
        log::trace!("resolved {} to {}", value, entry.name);
        Ok(entry)
    }

    /// The entry for an already decoded pair of legs.
    pub fn resolve_legs(&self, legs: Legs) -> &CompositeEntry {
        self.get(legs.number())
    }

    pub fn by_rank(&self, rank: u16) -> Option<&CompositeEntry> {
        let index = usize::from(rank).checked_sub(1)?;
        self.ranked.get(index).map(|&n| self.get(n))
    }

    /// Look an entry up by name, e.g. `"Ogbe Meji"`, `"Eji Ogbe"` or
    /// `"Irete-Ose"`.
    pub fn find_by_name(&self, name: &str) -> Result<&CompositeEntry> {
        let legs: Legs = name.parse()?;
        Ok(self.resolve_legs(legs))
    }

    /// Look an entry up by key (`"240"`, `"0xF0"`), rank (`"#17"`) or name.
    pub fn find(&self, query: &str) -> Result<&CompositeEntry> {
        let query = query.trim();
        if let Some(rank) = query.strip_prefix('#') {
            return rank
                .trim()
                .parse::<u16>()
                .ok()
                .and_then(|r| self.by_rank(r))
                .ok_or_else(|| Error::UnknownOdu(query.to_string()));
        }
        if let Some(value) = parse_integer(query) {
            return self.resolve(value);
        }
        self.find_by_name(query)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &CompositeEntry> {
        self.entries.iter()
    }

    /// Entries in rank order.
    pub fn iter_ranked(&self) -> impl Iterator<Item = &CompositeEntry> {
        self.ranked.iter().map(|&n| self.get(n))
    }

    /// The sixteen Meji, in rank order.
    pub fn principals(&self) -> impl Iterator<Item = &CompositeEntry> {
        self.iter_ranked().filter(|e| e.is_principal)
    }

    pub fn by_element(&self, element: Element) -> impl Iterator<Item = &CompositeEntry> {
        self.iter_ranked().filter(move |e| e.element == element)
    }

    pub fn entries(&self) -> &[CompositeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Repository {
    type Item = &'a CompositeEntry;
    type IntoIter = std::slice::Iter<'a, CompositeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Resolve a value against the built-in corpus.
pub fn resolve(value: i64) -> Result<&'static CompositeEntry> {
    Repository::global().resolve(value)
}
