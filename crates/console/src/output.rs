//! Catalogue rendering for the console.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use vending_machine::CatalogueEntry;

/// Environment variable selecting how catalogues are printed.
pub const OUTPUT_ENV: &str = "VENDING_OUTPUT";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown output format '{0}' (expected text or json)")]
pub struct UnknownOutputFormat(pub String);

impl core::str::FromStr for OutputFormat {
    type Err = UnknownOutputFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownOutputFormat(s.to_string())),
        }
    }
}

impl OutputFormat {
    /// `VENDING_OUTPUT`, defaulting to text when unset.
    pub fn from_env() -> Result<Self, UnknownOutputFormat> {
        match std::env::var(OUTPUT_ENV) {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(OutputFormat::default()),
        }
    }
}

#[derive(Serialize)]
struct CatalogueView<'a> {
    step: &'a str,
    entries: &'a [CatalogueEntry],
}

/// Print one catalogue snapshot, labelled with the demo step that produced it.
pub fn print_catalogue(
    out: &mut impl Write,
    format: OutputFormat,
    step: &str,
    catalogue: &[CatalogueEntry],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out)?;
            writeln!(out, "Catalogue ({step}):")?;
            for entry in catalogue {
                writeln!(out, "{entry}")?;
            }
            writeln!(out)?;
        }
        OutputFormat::Json => {
            let view = CatalogueView {
                step,
                entries: catalogue,
            };
            serde_json::to_writer(&mut *out, &view)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
