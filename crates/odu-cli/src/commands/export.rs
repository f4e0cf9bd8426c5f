use anyhow::{Context, Result};
use odu_core::Repository;
use std::path::Path;

/// Write the corpus as JSON in rank order, to a file or stdout.
pub fn export(output: Option<&Path>) -> Result<()> {
    let repo = Repository::global();

    match output {
        Some(path) => {
            repo.write_json(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("wrote {} entries to {}", repo.len(), path.display());
            println!("✓ Exported {} entries to {}", repo.len(), path.display());
        }
        None => {
            let json = repo.to_json().context("Failed to serialize corpus")?;
            println!("{}", json);
        }
    }

    Ok(())
}
