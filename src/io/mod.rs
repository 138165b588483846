//! Batch input and delimited-text output.
//!
//! Radius pairs are read from TOML ([`BatchReader`]); classifications, anion
//! sweeps and the threshold table are written as CSV or TSV.

use std::fmt;
use std::str::FromStr;

mod batch;
mod error;
mod writer;

pub use batch::{BatchEntry, BatchReader, ClassifiedPair, classify_batch};
pub use error::Error;
pub use writer::{write_classifications, write_sweep, write_thresholds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Csv,
    Tsv,
}

impl Format {
    pub fn delimiter(&self) -> char {
        match self {
            Format::Csv => ',',
            Format::Tsv => '\t',
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Csv => write!(f, "CSV"),
            Format::Tsv => write!(f, "TSV"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Format::Csv),
            "tsv" | "tab" => Ok(Format::Tsv),
            _ => Err(format!("unknown output format '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_delimiters() {
        assert_eq!(Format::Csv.delimiter(), ',');
        assert_eq!(Format::Tsv.delimiter(), '\t');
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("CSV".parse::<Format>(), Ok(Format::Csv));
        assert_eq!("tab".parse::<Format>(), Ok(Format::Tsv));
        assert!("json".parse::<Format>().is_err());
    }
}
