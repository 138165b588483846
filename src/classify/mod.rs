mod config;
mod error;
mod sweep;
mod table;

pub use config::{ClassifyConfig, DEFAULT_SCALE_CEILING, DEFAULT_VALIDITY_LIMIT, DegeneratePolicy};
pub use error::Error;
pub use sweep::{
    DEFAULT_ANION_MAX, DEFAULT_ANION_MIN, DEFAULT_SWEEP_STEP, MAX_SWEEP_POINTS, SweepConfig,
    SweepPoint, sweep,
};
pub use table::{Band, THRESHOLDS, TRANSITION_THRESHOLD, Threshold, bands, markers};

use crate::model::classification::Classification;
use crate::model::radii::{Ion, IonicRadii};

/// Classifies a radius pair with the default configuration.
///
/// A non-positive anion radius yields the sentinel ratio `0`.
pub fn classify(cation_radius: f64, anion_radius: f64) -> Classification {
    let radii = IonicRadii::new(cation_radius, anion_radius);
    classify_ratio(sentinel_ratio(&radii), DEFAULT_VALIDITY_LIMIT)
}

/// Classifies a radius pair under `config`.
///
/// # Errors
///
/// Only fails with [`Error::InvalidRadius`] when `config.degenerate` is
/// [`DegeneratePolicy::Reject`].
pub fn classify_with(radii: IonicRadii, config: &ClassifyConfig) -> Result<Classification, Error> {
    let ratio = match config.degenerate {
        DegeneratePolicy::Sentinel => sentinel_ratio(&radii),
        DegeneratePolicy::Reject => {
            for ion in [Ion::Cation, Ion::Anion] {
                let value = radii.radius(ion);
                if !(value.is_finite() && value > 0.0) {
                    return Err(Error::invalid_radius(ion, value));
                }
            }
            radii.cation_radius / radii.anion_radius
        }
    };

    Ok(classify_ratio(ratio, config.validity_limit))
}

/// Classifies an already computed ratio.
pub fn classify_ratio(ratio: f64, validity_limit: f64) -> Classification {
    let geometry = table::lookup(ratio);
    let within_validity = ratio <= validity_limit;
    log::trace!(
        "r/R = {ratio:.6} -> NC {} ({geometry})",
        geometry.coordination_number()
    );

    Classification {
        ratio,
        geometry,
        within_validity,
    }
}

/// Anion radius at which r/R crosses the triangular/tetrahedral boundary.
///
/// ```
/// let r = radius_ratio::transition_anion_radius(1.0);
/// assert!((r - 4.444).abs() < 1e-3);
/// ```
pub fn transition_anion_radius(cation_radius: f64) -> f64 {
    cation_radius / TRANSITION_THRESHOLD
}

/// Normalizes `ratio` into `[0, 1]` against [`DEFAULT_SCALE_CEILING`].
pub fn scale_position(ratio: f64) -> f64 {
    scale_position_with(ratio, DEFAULT_SCALE_CEILING)
}

pub fn scale_position_with(ratio: f64, ceiling: f64) -> f64 {
    (ratio / ceiling).clamp(0.0, 1.0)
}

fn sentinel_ratio(radii: &IonicRadii) -> f64 {
    match radii.raw_ratio() {
        Some(ratio) => ratio,
        None => {
            log::debug!(
                "anion radius {} is not positive; using sentinel ratio 0",
                radii.anion_radius
            );
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::geometry::Geometry;

    #[test]
    fn sodium_chloride_is_octahedral() {
        let c = classify(0.55, 1.0);
        assert!((c.ratio - 0.550).abs() < 1e-12);
        assert_eq!(c.coordination_number(), 6);
        assert_eq!(c.geometry_name(), "Octahedral");
    }

    #[test]
    fn equal_radii_are_close_packed() {
        let c = classify(1.0, 1.0);
        assert_eq!(c.ratio, 1.0);
        assert_eq!(c.coordination_number(), 12);
        assert_eq!(c.geometry_name(), "Cuboctahedral/close-packed");
    }

    #[test]
    fn tiny_cation_is_triangular() {
        let c = classify(0.1, 7.0);
        assert!((c.ratio - 0.1 / 7.0).abs() < 1e-12);
        assert!((c.ratio - 0.0143).abs() < 1e-4);
        assert_eq!(c.coordination_number(), 3);
    }

    #[test]
    fn zero_anion_uses_sentinel() {
        let c = classify(1.0, 0.0);
        assert_eq!(c.ratio, 0.0);
        assert_eq!(c.coordination_number(), 3);

        let negative = classify(1.0, -2.0);
        assert_eq!(negative.ratio, 0.0);
        assert_eq!(negative.geometry, Geometry::Triangular);
    }

    #[test]
    fn each_threshold_boundary() {
        let eps = 1e-9;
        let expected_below = [3u8, 3, 4, 6, 8];
        for (t, below) in THRESHOLDS.iter().zip(expected_below) {
            let at = classify_ratio(t.lower_bound, DEFAULT_VALIDITY_LIMIT);
            assert_eq!(at.coordination_number(), t.coordination_number());

            let under = classify_ratio(t.lower_bound - eps, DEFAULT_VALIDITY_LIMIT);
            assert_eq!(under.coordination_number(), below);
        }
    }

    #[test]
    fn classification_is_idempotent() {
        let a = classify(0.72, 1.40);
        let b = classify(0.72, 1.40);
        assert_eq!(a.ratio.to_bits(), b.ratio.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn large_ratios_stay_close_packed_but_leave_validity() {
        let c = classify(1.3, 1.0);
        assert_eq!(c.coordination_number(), 12);
        assert!(!c.within_validity);
        assert!(c.cation_exceeds_anion());

        let edge = classify(1.2, 1.0);
        assert!(edge.within_validity);

        let huge = classify(100.0, 0.5);
        assert_eq!(huge.geometry, Geometry::Cuboctahedral);
    }

    #[test]
    fn strict_policy_rejects_degenerate_radii() {
        let strict = ClassifyConfig::strict();

        let err = classify_with(IonicRadii::new(1.0, 0.0), &strict).unwrap_err();
        assert!(matches!(err, Error::InvalidRadius { ion: Ion::Anion, .. }));

        let err = classify_with(IonicRadii::new(1.0, -1.0), &strict).unwrap_err();
        assert!(matches!(err, Error::InvalidRadius { ion: Ion::Anion, .. }));

        let err = classify_with(IonicRadii::new(f64::NAN, 1.0), &strict).unwrap_err();
        assert!(matches!(err, Error::InvalidRadius { ion: Ion::Cation, .. }));

        let ok = classify_with(IonicRadii::new(0.55, 1.0), &strict).unwrap();
        assert_eq!(ok.geometry, Geometry::Octahedral);
    }

    #[test]
    fn sentinel_policy_matches_plain_classify() {
        let config = ClassifyConfig::default();
        for (r, big_r) in [(0.55, 1.0), (1.0, 0.0), (0.1, 7.0), (2.0, 0.3)] {
            let with = classify_with(IonicRadii::new(r, big_r), &config).unwrap();
            assert_eq!(with, classify(r, big_r));
        }
    }

    #[test]
    fn custom_validity_limit() {
        let config = ClassifyConfig {
            validity_limit: 1.0,
            ..Default::default()
        };
        let c = classify_with(IonicRadii::new(1.1, 1.0), &config).unwrap();
        assert!(!c.within_validity);
    }

    #[test]
    fn transition_radius_for_unit_cation() {
        let r = transition_anion_radius(1.0);
        assert!((r - 1.0 / 0.225).abs() < 1e-12);
        assert!((r - 4.444).abs() < 1e-3);
        assert_eq!(classify(1.0, r * 0.99).coordination_number(), 4);
        assert_eq!(classify(1.0, r * 1.01).coordination_number(), 3);
    }

    #[test]
    fn scale_position_is_clamped() {
        assert!((scale_position(0.55) - 0.5).abs() < 1e-12);
        assert_eq!(scale_position(1.1), 1.0);
        assert_eq!(scale_position(2.0), 1.0);
        assert_eq!(scale_position(0.0), 0.0);
        assert_eq!(scale_position(-0.5), 0.0);
        assert!((scale_position_with(0.5, 2.0) - 0.25).abs() < 1e-12);
    }
}
