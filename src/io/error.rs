use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse batch file: {details} (at line ~{line})")]
    Parse { line: usize, details: String },

    #[error("batch file contains no [[pair]] entries")]
    EmptyBatch,

    #[error("classification of pair {index} ('{label}') failed: {source}")]
    Classify {
        index: usize,
        label: String,
        #[source]
        source: crate::classify::Error,
    },
}

impl Error {
    pub fn parse(line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            line,
            details: details.into(),
        }
    }

    /// Converts a TOML error into [`Error::Parse`], resolving its byte span
    /// to a 1-based line number within `source`.
    pub(crate) fn from_toml(err: toml::de::Error, source: &str) -> Self {
        let line = err
            .span()
            .map(|span| {
                let end = span.start.min(source.len());
                source.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
            })
            .unwrap_or(1);
        Self::parse(line, err.message().trim())
    }
}
