use anyhow::Result;
use odu_core::{CompositeEntry, Element, Repository};

use crate::config::OutputFormat;
use crate::output;

/// List entries, filtered and ordered as requested.
pub fn list(
    principal: bool,
    element: Option<&str>,
    by_number: bool,
    format: OutputFormat,
) -> Result<()> {
    let element = element.map(str::parse::<Element>).transpose()?;
    let entries = select(Repository::global(), principal, element, by_number);
    log::debug!("listing {} entries", entries.len());

    match format {
        OutputFormat::Text => {
            println!("{:>3}  {:>3}  {:<8}  {:<18} {:<6} Orisha", "#", "Key", "Binary", "Name", "Elem.");
            for entry in &entries {
                println!("{}", output::entry_line(entry));
            }
        }
        OutputFormat::Json => output::print_json(&entries)?,
    }

    Ok(())
}

fn select(
    repo: &Repository,
    principal: bool,
    element: Option<Element>,
    by_number: bool,
) -> Vec<&CompositeEntry> {
    let ordered: Box<dyn Iterator<Item = &CompositeEntry> + '_> = if by_number {
        Box::new(repo.iter())
    } else {
        Box::new(repo.iter_ranked())
    };

    ordered
        .filter(|e| !principal || e.is_principal)
        .filter(|e| element.map_or(true, |el| e.element == el))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_defaults_to_rank_order() {
        let entries = select(Repository::global(), false, None, false);
        assert_eq!(entries.len(), 256);
        assert_eq!(entries[0].name, "Ogbe Meji");
        assert_eq!(entries[1].name, "Oyeku Meji");
        assert_eq!(entries[16].name, "Ogbe-Oyeku");
    }

    #[test]
    fn test_select_by_number() {
        let entries = select(Repository::global(), false, None, true);
        assert_eq!(entries[0].number, 0);
        assert_eq!(entries[255].number, 255);
    }

    #[test]
    fn test_select_principal() {
        let entries = select(Repository::global(), true, None, false);
        assert_eq!(entries.len(), 16);
        assert!(entries.iter().all(|e| e.is_principal));
    }

    #[test]
    fn test_select_by_element() {
        let entries = select(Repository::global(), false, Some(Element::Eau), false);
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|e| e.element == Element::Eau));
    }
}
