use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;
mod output;

use config::{Config, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "odu", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (default from config, otherwise text)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Resolve a byte to its Odu
    ///
    /// The byte is split into two nibbles. The high nibble is the right leg
    /// and the low nibble is the left leg, each read as one of the sixteen
    /// primitive figures. The composite entry keyed by the byte is printed
    /// with its legs drawn as they would appear on the tray.
    ///
    /// The value may be decimal (240), hexadecimal (0xF0) or binary
    /// (0b11110000). With --stdin, one raw byte is read from standard input
    /// instead, so any byte source can be piped in:
    ///
    ///     head -c1 /dev/urandom | odu cast --stdin
    ///
    /// Values outside 0..=255 are rejected.
    Cast {
        /// The byte to resolve
        #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
        value: Option<String>,

        /// Read one raw byte from standard input
        #[arg(long)]
        stdin: bool,
    },
    /// Show one entry by key, rank or name
    ///
    /// Accepts a key ("240", "0xF0"), a traditional rank prefixed with '#'
    /// ("#17") or a name ("Ogbe-Oyeku", "Ogbe Meji", "Eji Ogbe").
    Show {
        /// Key, #rank or name
        query: String,
    },
    /// List entries, one per line
    List {
        /// Only the sixteen Meji
        #[arg(long)]
        principal: bool,

        /// Only entries of this element (feu, eau, air, terre, or English)
        #[arg(long)]
        element: Option<String>,

        /// Order by key instead of traditional rank
        #[arg(long)]
        by_number: bool,
    },
    /// Show the sixteen primitive figures
    Figures,
    /// Check a corpus for integrity
    ///
    /// Without --file, the built-in corpus is checked. With --file, a JSON
    /// array previously written by 'odu export' is loaded and every issue
    /// found is listed.
    Validate {
        /// JSON corpus to check
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Write the whole corpus as JSON, in traditional rank order
    Export {
        /// Output path (default: standard output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the current effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Create the config file with example content
    Init,
    /// Print example configuration
    Example,
    /// Set a config value
    Set {
        /// One of: format, logging.level, logging.coloured
        key: String,
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    config::init_logging(&config.logging, cli.verbose)?;

    let format = cli.format.unwrap_or(config.format);
    log::debug!("output format: {}", format);

    match cli.command {
        Commands::Cast { value, stdin } => {
            commands::cast(value.as_deref(), stdin, format)?;
        }
        Commands::Show { query } => {
            commands::show(&query, format)?;
        }
        Commands::List {
            principal,
            element,
            by_number,
        } => {
            commands::list(principal, element.as_deref(), by_number, format)?;
        }
        Commands::Figures => {
            commands::figures(format)?;
        }
        Commands::Validate { file } => {
            commands::validate(file.as_deref())?;
        }
        Commands::Export { output } => {
            commands::export(output.as_deref())?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Init => commands::config::init_config()?,
            ConfigAction::Example => commands::config::show_example(),
            ConfigAction::Set { key, value } => commands::config::set_config(&key, &value)?,
        },
    }

    Ok(())
}
