use anyhow::Result;
use odu_core::figure::TRADITIONAL_ORDER;
use odu_core::PrimitiveFigure;

use crate::config::OutputFormat;
use crate::output;

/// Print the sixteen primitive figures in seniority order.
pub fn figures(format: OutputFormat) -> Result<()> {
    let table: Vec<&PrimitiveFigure> = TRADITIONAL_ORDER.iter().map(|f| f.primitive()).collect();

    match format {
        OutputFormat::Text => {
            println!("Primitive Figures");
            println!("=================\n");
            for primitive in table {
                println!("{}", output::figure_line(primitive));
            }
            println!("\nI = single mark (1), II = double mark (0), read top to bottom");
        }
        OutputFormat::Json => output::print_json(&table)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figures_in_both_formats() {
        assert!(figures(OutputFormat::Text).is_ok());
        assert!(figures(OutputFormat::Json).is_ok());
    }
}
