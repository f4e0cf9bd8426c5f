use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration for odu.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (ODU_* prefix)
/// 3. Config file (~/.config/odu/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How entries are printed.
    ///
    /// Can be set via:
    /// - CLI: --format json
    /// - ENV: ODU_FORMAT
    /// - Config: format = "json"
    pub format: OutputFormat,

    pub logging: LoggingConfig,
}

/// Output format for printed entries.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format: {}\n\nValid formats: text, json", other),
        }
    }
}

/// Logger settings handed to twyg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace.
    pub level: String,
    pub coloured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("warn"),
            coloured: true,
        }
    }
}

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

impl LoggingConfig {
    /// The configured level as a twyg level. Unknown names fall back to warn.
    pub fn level(&self) -> twyg::LogLevel {
        parse_level(&self.level).unwrap_or(twyg::LogLevel::Warn)
    }
}

fn parse_level(name: &str) -> Option<twyg::LogLevel> {
    match name.trim().to_ascii_lowercase().as_str() {
        "error" => Some(twyg::LogLevel::Error),
        "warn" | "warning" => Some(twyg::LogLevel::Warn),
        "info" => Some(twyg::LogLevel::Info),
        "debug" => Some(twyg::LogLevel::Debug),
        "trace" => Some(twyg::LogLevel::Trace),
        _ => None,
    }
}

/// Install the global logger.
///
/// `verbose` raises the level to debug regardless of configuration.
pub fn init_logging(logging: &LoggingConfig, verbose: bool) -> Result<()> {
    let level = if verbose {
        twyg::LogLevel::Debug
    } else {
        logging.level()
    };

    let opts = twyg::OptsBuilder::new()
        .coloured(logging.coloured)
        .level(level)
        .report_caller(verbose)
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid logging options: {:?}", e))?;

    twyg::setup(opts).map_err(|e| anyhow::anyhow!("Failed to set up logging: {:?}", e))?;
    Ok(())
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/odu/config.toml
    /// Reads environment variables with ODU_ prefix.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific file plus the environment.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("odu");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;
        log::debug!("loaded configuration: {:?}", config);

        Ok(config)
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/odu/config.toml
/// - macOS: ~/Library/Application Support/odu/config.toml
/// - Windows: %APPDATA%\odu\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("odu")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Odu Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (ODU_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# How entries are printed: "text" or "json"
#
# Can also be set via:
# - CLI: odu --format json cast 240
# - Environment: ODU_FORMAT=json
format = "text"

[logging]
# One of: error, warn, info, debug, trace
level = "warn"
coloured = true
"#
}

/// Create the config file with example content if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

/// Keys accepted by `odu config set`.
pub const SETTABLE_KEYS: [&str; 3] = ["format", "logging.level", "logging.coloured"];

/// Set one key in a config document, preserving comments and layout.
pub fn set_value(contents: &str, key: &str, value: &str) -> Result<String> {
    let mut doc: toml_edit::DocumentMut = contents.parse().context("Failed to parse config file")?;

    match key {
        "format" => {
            let format: OutputFormat = value.parse()?;
            doc["format"] = toml_edit::value(format.to_string());
        }
        "logging.level" => {
            if parse_level(value).is_none() {
                anyhow::bail!(
                    "Unknown log level: {}\n\nValid levels: {}",
                    value,
                    LEVELS.join(", ")
                );
            }
            doc["logging"]["level"] = toml_edit::value(value.trim().to_ascii_lowercase());
        }
        "logging.coloured" => {
            let coloured: bool = value
                .trim()
                .parse()
                .with_context(|| format!("Expected true or false, got {:?}", value))?;
            doc["logging"]["coloured"] = toml_edit::value(coloured);
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\nValid keys: {}",
                key,
                SETTABLE_KEYS.join(", ")
            );
        }
    }

    Ok(doc.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.coloured);
    }

    #[test]
    fn test_example_config_parses_to_defaults() {
        let config: Config = toml::from_str(example_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_config_load_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("missing.toml"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_ensure_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("odu").join("config.toml");
        assert!(ensure_config_file(&path).unwrap());
        assert!(!ensure_config_file(&path).unwrap());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, example_config());
    }

    #[test]
    fn test_level_parsing() {
        let logging = LoggingConfig {
            level: "DEBUG".to_string(),
            coloured: false,
        };
        assert!(matches!(logging.level(), twyg::LogLevel::Debug));
        let logging = LoggingConfig {
            level: "loud".to_string(),
            coloured: false,
        };
        assert!(matches!(logging.level(), twyg::LogLevel::Warn));
    }

    #[test]
    fn test_set_value_preserves_comments() {
        let updated = set_value(example_config(), "format", "json").unwrap();
        assert!(updated.contains("format = \"json\""));
        assert!(updated.contains("# Odu Configuration File"));

        let config: Config = toml::from_str(&updated).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_set_nested_value_on_empty_file() {
        let updated = set_value("", "logging.level", "Trace").unwrap();
        let config: Config = toml::from_str(&updated).unwrap();
        assert_eq!(config.logging.level, "trace");

        let updated = set_value(&updated, "logging.coloured", "false").unwrap();
        let config: Config = toml::from_str(&updated).unwrap();
        assert!(!config.logging.coloured);
    }

    #[test]
    fn test_set_value_rejects_bad_input() {
        assert!(set_value("", "format", "yaml").is_err());
        assert!(set_value("", "logging.level", "loud").is_err());
        assert!(set_value("", "logging.coloured", "maybe").is_err());
        assert!(set_value("", "database_path", "/tmp").is_err());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::Text.to_string(), "text");
    }
}
