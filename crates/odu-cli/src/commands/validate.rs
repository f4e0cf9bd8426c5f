use anyhow::{Context, Result};
use odu_core::{validate as integrity, Error, Repository};
use std::path::Path;

/// Check the built-in corpus, or a JSON corpus on disk.
pub fn validate(file: Option<&Path>) -> Result<()> {
    let Some(path) = file else {
        let issues = integrity::check(Repository::global().entries());
        return report("built-in corpus", &issues);
    };

    match Repository::load_json(path) {
        Ok(_) => report(&path.display().to_string(), &[]),
        Err(Error::DataIntegrity(issues)) => report(&path.display().to_string(), &issues),
        Err(e) => Err(e).with_context(|| format!("Failed to load {}", path.display())),
    }
}

fn report(source: &str, issues: &[odu_core::IntegrityIssue]) -> Result<()> {
    if issues.is_empty() {
        println!("✓ {}: 256 entries, no issues", source);
        return Ok(());
    }

    println!("✗ {}: {} issue(s)\n", source, issues.len());
    for issue in issues {
        println!("  - {}", issue);
    }
    anyhow::bail!("{} failed validation", source)
}
