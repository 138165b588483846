//! Error types for radius-ratio classification.
//!
//! Errors only arise when the caller opts into strict validation, asks for a
//! malformed sweep, or supplies an invalid configuration. The default
//! classification path is infallible.

use thiserror::Error;

use crate::model::radii::Ion;

/// Errors that can occur while classifying radii or preparing a sweep.
#[derive(Debug, Error)]
pub enum Error {
    /// A radius was rejected under [`DegeneratePolicy::Reject`](crate::DegeneratePolicy::Reject).
    #[error("invalid {ion} radius {value}: radii must be finite and strictly positive")]
    InvalidRadius {
        /// Which radius was rejected.
        ion: Ion,
        /// The offending value.
        value: f64,
    },

    /// The anion sweep cannot be generated from the given bounds.
    #[error("invalid anion sweep: {0}")]
    InvalidSweep(String),

    /// A configuration value is out of range.
    #[error("invalid classifier configuration: {0}")]
    InvalidConfig(String),

    /// Failed to parse a configuration TOML document.
    #[error("failed to parse classifier configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    /// Creates an [`InvalidRadius`](Error::InvalidRadius) error.
    pub fn invalid_radius(ion: Ion, value: f64) -> Self {
        Self::InvalidRadius { ion, value }
    }

    /// Creates an [`InvalidSweep`](Error::InvalidSweep) error.
    pub fn invalid_sweep(details: impl Into<String>) -> Self {
        Self::InvalidSweep(details.into())
    }

    /// Creates an [`InvalidConfig`](Error::InvalidConfig) error.
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_radius_message_names_the_ion() {
        let err = Error::invalid_radius(Ion::Anion, 0.0);
        assert_eq!(
            err.to_string(),
            "invalid anion radius 0: radii must be finite and strictly positive"
        );
    }

    #[test]
    fn config_parse_wraps_toml_error() {
        let toml_err = toml::from_str::<toml::Table>("validity_limit = ").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::ConfigParse(_)));
        assert!(err.to_string().starts_with("failed to parse classifier configuration"));
    }
}
