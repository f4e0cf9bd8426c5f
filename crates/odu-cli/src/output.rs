//! Text and JSON rendering for the terminal.

use anyhow::{Context, Result};
use odu_core::correspondence::geomantic_name;
use odu_core::{CompositeEntry, PrimitiveFigure};
use serde::Serialize;
use std::fmt;

/// Pretty-print any serializable value on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// Full text rendering of one entry, legs drawn first.
#[derive(Debug, Clone, Copy)]
pub struct EntryView<'a>(pub &'a CompositeEntry);

impl fmt::Display for EntryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.0;
        let c = &entry.correspondences;

        writeln!(f, "{}  (#{}, key {})", entry.name, c.rank, entry.number)?;
        writeln!(f)?;
        for line in entry.legs().render().lines() {
            writeln!(f, "    {}", line)?;
        }
        writeln!(f)?;
        writeln!(f, "  Signature:   {}", entry.binary_signature)?;
        writeln!(
            f,
            "  Legs:        {} (right), {} (left)",
            entry.right_leg, entry.left_leg
        )?;
        writeln!(f, "  Orisha:      {}", entry.orisha)?;
        writeln!(f, "  Element:     {}", entry.element)?;
        writeln!(f, "  Yi Jing:     hexagram {}", c.hexagram_yi_jing)?;
        writeln!(
            f,
            "  Geomancy:    {} ({})",
            geomantic_name(c.geomancy),
            c.geomancy
        )?;

        writeln!(f, "\nMeaning\n  {}", entry.meaning)?;

        writeln!(f, "\nProverbs")?;
        for proverb in &entry.proverbs {
            writeln!(f, "  - {}", proverb)?;
        }

        writeln!(f, "\nVerses")?;
        for verse in &entry.ese_ifa_verses {
            writeln!(f, "  {}", verse)?;
        }

        writeln!(f, "\nPrescriptions\n  {}", entry.prescriptions)?;
        write!(f, "\nInterdictions\n  {}", entry.interdictions)
    }
}

/// One summary line for listings.
pub fn entry_line(entry: &CompositeEntry) -> String {
    format!(
        "{:>3}  {:>3}  {}  {:<18} {:<6} {}",
        entry.correspondences.rank,
        entry.number,
        entry.binary_signature,
        entry.name,
        entry.element,
        entry.orisha
    )
}

/// One row of the primitive figure table, marks drawn inline.
pub fn figure_line(primitive: &PrimitiveFigure) -> String {
    let marks = primitive
        .figure
        .marks()
        .iter()
        .map(|m| format!("{:<2}", m))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{:>2}  {:04b}  {}  {:<9} {}",
        primitive.figure.seniority() + 1,
        primitive.bits,
        marks,
        primitive.name,
        primitive.theme
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use odu_core::{Figure, Repository};

    #[test]
    fn test_entry_text_draws_legs() {
        let entry = Repository::global().get(240);
        let text = EntryView(entry).to_string();
        assert!(text.starts_with("Ogbe-Oyeku  (#17, key 240)"));
        assert!(text.contains("    II   I "));
        assert!(text.contains("Signature:   11110000"));
        assert!(text.contains("Ogbe (right), Oyeku (left)"));
        assert!(text.contains(&entry.meaning));
    }

    #[test]
    fn test_entry_text_lists_every_proverb() {
        let entry = Repository::global().get(255);
        let text = EntryView(entry).to_string();
        for proverb in &entry.proverbs {
            assert!(text.contains(proverb.as_str()));
        }
    }

    #[test]
    fn test_entry_line() {
        let line = entry_line(Repository::global().get(255));
        assert!(line.starts_with("  1  255  11111111  Ogbe Meji"));
    }

    #[test]
    fn test_figure_line() {
        let line = figure_line(Figure::Iwori.primitive());
        assert!(line.starts_with(" 3  0110  II I  I  II  Iwori"));
    }
}
