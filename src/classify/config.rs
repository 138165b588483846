//! Configuration for radius-ratio classification.
//!
//! The threshold table itself is fixed; only the handling of degenerate
//! input and the two presentation limits can be tuned.

use serde::Deserialize;

use super::error::Error;

/// Ratio above which the rigid-sphere model is no longer physically meaningful.
pub const DEFAULT_VALIDITY_LIMIT: f64 = 1.2;

/// Soft ceiling used to normalize a ratio into a `[0, 1]` scale position.
pub const DEFAULT_SCALE_CEILING: f64 = 1.1;

/// How the classifier treats radii that cannot form a meaningful ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// A non-positive anion radius yields the ratio `0` (classified as NC = 3).
    /// The cation radius is never checked.
    #[default]
    Sentinel,

    /// Non-positive or non-finite radii are rejected with
    /// [`Error::InvalidRadius`].
    Reject,
}

/// Main configuration for [`classify_with`](super::classify_with) and
/// [`sweep`](super::sweep).
///
/// # Examples
///
/// ```
/// use radius_ratio::{ClassifyConfig, DegeneratePolicy};
///
/// let default = ClassifyConfig::default();
/// assert_eq!(default.degenerate, DegeneratePolicy::Sentinel);
///
/// let strict = ClassifyConfig {
///     degenerate: DegeneratePolicy::Reject,
///     ..Default::default()
/// };
/// assert_eq!(strict.validity_limit, 1.2);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifyConfig {
    /// Policy for non-positive anion radii.
    pub degenerate: DegeneratePolicy,

    /// Ratios strictly above this value are flagged as outside the model's
    /// physical validity. They are still classified.
    pub validity_limit: f64,

    /// Divisor applied by [`scale_position`](super::scale_position).
    pub scale_ceiling: f64,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            degenerate: DegeneratePolicy::Sentinel,
            validity_limit: DEFAULT_VALIDITY_LIMIT,
            scale_ceiling: DEFAULT_SCALE_CEILING,
        }
    }
}

impl ClassifyConfig {
    /// Default limits with strict rejection of degenerate radii.
    pub fn strict() -> Self {
        Self {
            degenerate: DegeneratePolicy::Reject,
            ..Self::default()
        }
    }

    /// Parses a configuration from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed TOML or unknown keys, and
    /// [`Error::InvalidConfig`] when a limit is not finite and positive.
    pub fn from_toml_str(toml: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(self.validity_limit.is_finite() && self.validity_limit > 0.0) {
            return Err(Error::invalid_config(format!(
                "validity_limit must be finite and positive, got {}",
                self.validity_limit
            )));
        }
        if !(self.scale_ceiling.is_finite() && self.scale_ceiling > 0.0) {
            return Err(Error::invalid_config(format!(
                "scale_ceiling must be finite and positive, got {}",
                self.scale_ceiling
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = ClassifyConfig::default();
        assert_eq!(config.degenerate, DegeneratePolicy::Sentinel);
        assert_eq!(config.validity_limit, 1.2);
        assert_eq!(config.scale_ceiling, 1.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn strict_only_changes_policy() {
        let strict = ClassifyConfig::strict();
        assert_eq!(strict.degenerate, DegeneratePolicy::Reject);
        assert_eq!(strict.validity_limit, DEFAULT_VALIDITY_LIMIT);
        assert_eq!(strict.scale_ceiling, DEFAULT_SCALE_CEILING);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = ClassifyConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClassifyConfig::default());
    }

    #[test]
    fn partial_toml_overrides_given_keys() {
        let config = ClassifyConfig::from_toml_str(
            r#"
            degenerate = "reject"
            validity_limit = 1.5
            "#,
        )
        .unwrap();
        assert_eq!(config.degenerate, DegeneratePolicy::Reject);
        assert_eq!(config.validity_limit, 1.5);
        assert_eq!(config.scale_ceiling, DEFAULT_SCALE_CEILING);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ClassifyConfig::from_toml_str("thresholds = [0.1]").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn non_positive_limits_are_rejected() {
        let err = ClassifyConfig::from_toml_str("scale_ceiling = 0.0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let config = ClassifyConfig {
            validity_limit: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
