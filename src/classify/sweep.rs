use crate::model::classification::Classification;
use crate::model::radii::IonicRadii;

use super::config::ClassifyConfig;
use super::error::Error;

/// Upper limit on generated points.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

pub const DEFAULT_ANION_MIN: f64 = 0.10;
pub const DEFAULT_ANION_MAX: f64 = 2.50;
pub const DEFAULT_SWEEP_STEP: f64 = 0.01;

/// Slack for floating-point error when counting whole steps in a range.
const STEP_TOLERANCE: f64 = 1e-9;

/// Anion radius range swept at a fixed cation radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    pub cation_radius: f64,
    pub anion_min: f64,
    pub anion_max: f64,
    pub step: f64,
}

impl SweepConfig {
    /// Sweeps [`DEFAULT_ANION_MIN`] to [`DEFAULT_ANION_MAX`] in steps of
    /// [`DEFAULT_SWEEP_STEP`].
    pub fn new(cation_radius: f64) -> Self {
        Self {
            cation_radius,
            anion_min: DEFAULT_ANION_MIN,
            anion_max: DEFAULT_ANION_MAX,
            step: DEFAULT_SWEEP_STEP,
        }
    }

    /// Number of points the sweep will produce.
    ///
    /// Only whole steps are taken, so the last point never exceeds
    /// `anion_max`; it lands on `anion_max` when the range is a multiple of
    /// `step`.
    pub fn point_count(&self) -> Result<usize, Error> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(Error::invalid_sweep(format!(
                "step must be finite and positive, got {}",
                self.step
            )));
        }
        if !(self.anion_min.is_finite() && self.anion_max.is_finite()) {
            return Err(Error::invalid_sweep("anion bounds must be finite"));
        }
        if self.anion_max < self.anion_min {
            return Err(Error::invalid_sweep(format!(
                "anion_max ({}) is below anion_min ({})",
                self.anion_max, self.anion_min
            )));
        }

        let intervals = ((self.anion_max - self.anion_min) / self.step + STEP_TOLERANCE).floor();
        if intervals >= MAX_SWEEP_POINTS as f64 {
            return Err(Error::invalid_sweep(format!(
                "sweep would produce more than {MAX_SWEEP_POINTS} points"
            )));
        }
        Ok(intervals as usize + 1)
    }
}

/// One sample of the ratio-vs-anion-radius curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub anion_radius: f64,
    pub classification: Classification,
}

/// Classifies every anion radius of the sweep.
///
/// # Errors
///
/// Returns [`Error::InvalidSweep`] for a malformed range and propagates
/// [`Error::InvalidRadius`] when `classify_config` rejects a radius.
pub fn sweep(
    config: &SweepConfig,
    classify_config: &ClassifyConfig,
) -> Result<Vec<SweepPoint>, Error> {
    let count = config.point_count()?;
    log::debug!(
        "sweeping anion radius {}..={} (step {}, {} points) at cation radius {}",
        config.anion_min,
        config.anion_max,
        config.step,
        count,
        config.cation_radius
    );

    (0..count)
        .map(|i| {
            let anion_radius = config.anion_min + i as f64 * config.step;
            let radii = IonicRadii::new(config.cation_radius, anion_radius);
            let classification = super::classify_with(radii, classify_config)?;
            Ok(SweepPoint {
                anion_radius,
                classification,
            })
        })
        .collect()
}
