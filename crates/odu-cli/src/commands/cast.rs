use anyhow::{Context, Result};
use odu_core::{parse_integer, CompositeEntry, Repository};
use std::io::Read;

use super::show::print_entry;
use crate::config::OutputFormat;

/// Resolve a byte given on the command line or read from stdin.
pub fn cast(value: Option<&str>, stdin: bool, format: OutputFormat) -> Result<()> {
    let entry = if stdin {
        let byte = read_byte(std::io::stdin().lock())?;
        log::debug!("read byte {} from stdin", byte);
        Repository::global().get(byte)
    } else {
        let value = value.context("No value given; pass a byte or use --stdin")?;
        resolve_arg(value)?
    };

    print_entry(entry, format)
}

fn resolve_arg(value: &str) -> Result<&'static CompositeEntry> {
    let Some(number) = parse_integer(value.trim()) else {
        anyhow::bail!(
            "Not an integer: {}\n\nExpected decimal (240), hex (0xF0) or binary (0b11110000)",
            value
        );
    };
    Ok(odu_core::resolve(number)?)
}

fn read_byte(mut reader: impl Read) -> Result<u8> {
    let mut buf = [0u8; 1];
    reader
        .read_exact(&mut buf)
        .context("Failed to read a byte from standard input")?;
    Ok(buf[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use odu_core::Error;

    #[test]
    fn test_resolve_arg() {
        assert_eq!(resolve_arg("240").unwrap().name, "Ogbe-Oyeku");
        assert_eq!(resolve_arg(" 0x0f ").unwrap().name, "Oyeku-Ogbe");
        assert!(resolve_arg("Ogbe").is_err());
    }

    #[test]
    fn test_resolve_arg_out_of_range() {
        let err = resolve_arg("256").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::OutOfRange { value: 256 })
        ));
    }

    #[test]
    fn test_resolve_arg_overflowing_integer_is_out_of_range() {
        let err = resolve_arg("99999999999999999999").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_read_byte_takes_first_byte() {
        assert_eq!(read_byte(&[0xF0u8, 0x01][..]).unwrap(), 240);
        assert!(read_byte(std::io::empty()).is_err());
    }
}
