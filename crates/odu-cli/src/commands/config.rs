use anyhow::{Context, Result};

use crate::config::{self, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    let path = config::config_file_path();

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", path.display());
    let exists = path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!("  format: {}", config.format);
    println!("  logging.level: {}", config.logging.level);
    println!("  logging.coloured: {}", config.logging.coloured);

    println!("\nPriority: CLI args > ENV vars (ODU_*) > Config file > Defaults");

    Ok(())
}

pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Create the config file with example content.
pub fn init_config() -> Result<()> {
    let path = config::config_file_path();

    if config::ensure_config_file(&path)? {
        println!("✓ Created config file: {}", path.display());
    } else {
        println!("Config file already exists: {}", path.display());
    }

    Ok(())
}

pub fn show_example() {
    print!("{}", config::example_config());
}

/// Set a config value, creating the file first if needed.
pub fn set_config(key: &str, value: &str) -> Result<()> {
    let path = config::config_file_path();
    config::ensure_config_file(&path)?;

    let contents = std::fs::read_to_string(&path).context("Failed to read config file")?;
    let updated = config::set_value(&contents, key, value)?;
    std::fs::write(&path, updated).context("Failed to write config file")?;

    println!("✓ Set {} = {}", key, value);
    println!("  in {}", path.display());

    Ok(())
}
