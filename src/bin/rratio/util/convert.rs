use radius_ratio::io::Format;

use crate::cli;

impl From<cli::OutputFormat> for Format {
    fn from(f: cli::OutputFormat) -> Self {
        match f {
            cli::OutputFormat::Csv => Self::Csv,
            cli::OutputFormat::Tsv => Self::Tsv,
        }
    }
}

pub fn policy_display_name(policy: radius_ratio::DegeneratePolicy) -> &'static str {
    match policy {
        radius_ratio::DegeneratePolicy::Sentinel => "sentinel (r/R = 0)",
        radius_ratio::DegeneratePolicy::Reject => "strict",
    }
}
