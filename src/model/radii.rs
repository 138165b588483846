use std::fmt;

/// Which side of the radius pair a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ion {
    Cation,
    Anion,
}

impl fmt::Display for Ion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ion::Cation => f.write_str("cation"),
            Ion::Anion => f.write_str("anion"),
        }
    }
}

/// A cation/anion radius pair expressed in the same linear unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IonicRadii {
    pub cation_radius: f64,
    pub anion_radius: f64,
}

impl IonicRadii {
    pub fn new(cation_radius: f64, anion_radius: f64) -> Self {
        Self {
            cation_radius,
            anion_radius,
        }
    }

    /// Returns `true` when the ratio is computable without the zero sentinel.
    #[inline]
    pub fn has_positive_anion(&self) -> bool {
        self.anion_radius > 0.0
    }

    #[inline]
    pub fn radius(&self, ion: Ion) -> f64 {
        match ion {
            Ion::Cation => self.cation_radius,
            Ion::Anion => self.anion_radius,
        }
    }

    /// Raw r/R, or `None` when the anion radius is not positive.
    #[inline]
    pub fn raw_ratio(&self) -> Option<f64> {
        if self.has_positive_anion() {
            Some(self.cation_radius / self.anion_radius)
        } else {
            None
        }
    }
}

impl From<(f64, f64)> for IonicRadii {
    fn from((cation_radius, anion_radius): (f64, f64)) -> Self {
        Self::new(cation_radius, anion_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_ratio_divides_cation_by_anion() {
        let radii = IonicRadii::new(1.02, 1.81);
        let ratio = radii.raw_ratio().unwrap();
        assert!((ratio - 1.02 / 1.81).abs() < 1e-12);
    }

    #[test]
    fn raw_ratio_is_none_for_non_positive_anion() {
        assert_eq!(IonicRadii::new(1.0, 0.0).raw_ratio(), None);
        assert_eq!(IonicRadii::new(1.0, -0.5).raw_ratio(), None);
    }

    #[test]
    fn radius_selects_by_ion() {
        let radii = IonicRadii::new(0.72, 1.40);
        assert_eq!(radii.radius(Ion::Cation), 0.72);
        assert_eq!(radii.radius(Ion::Anion), 1.40);
        assert_eq!(Ion::Anion.to_string(), "anion");
    }

    #[test]
    fn from_tuple_keeps_order() {
        let radii: IonicRadii = (0.55, 1.0).into();
        assert_eq!(radii.cation_radius, 0.55);
        assert_eq!(radii.anion_radius, 1.0);
    }
}
