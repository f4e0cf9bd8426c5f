use anyhow::Result;
use odu_core::{CompositeEntry, Repository};

use crate::config::OutputFormat;
use crate::output;

/// Show one entry by key, `#rank` or name.
pub fn show(query: &str, format: OutputFormat) -> Result<()> {
    let entry = Repository::global().find(query)?;
    print_entry(entry, format)
}

pub fn print_entry(entry: &CompositeEntry, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", output::EntryView(entry)),
        OutputFormat::Json => output::print_json(entry)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_by_key_rank_and_name() {
        assert!(show("240", OutputFormat::Text).is_ok());
        assert!(show("#17", OutputFormat::Json).is_ok());
        assert!(show("Eji Ogbe", OutputFormat::Text).is_ok());
    }

    #[test]
    fn test_show_unknown_query_fails() {
        assert!(show("#999", OutputFormat::Text).is_err());
        assert!(show("Ogbe Ogbe Ogbe", OutputFormat::Json).is_err());
        assert!(show("256", OutputFormat::Text).is_err());
    }
}
