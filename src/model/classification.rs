use super::geometry::Geometry;

/// Outcome of a single radius-ratio classification.
///
/// A `Classification` carries no identity: it is recomputed from scratch for
/// every radius pair and is meant to be consumed and dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Cation radius divided by anion radius (0 for the degenerate sentinel).
    pub ratio: f64,
    /// Predicted coordination polyhedron.
    pub geometry: Geometry,
    /// `false` when the ratio exceeds the configured validity limit of the
    /// rigid-sphere model. The geometry is still reported.
    pub within_validity: bool,
}

impl Classification {
    #[inline]
    pub fn coordination_number(&self) -> u8 {
        self.geometry.coordination_number()
    }

    #[inline]
    pub fn geometry_name(&self) -> &'static str {
        self.geometry.name()
    }

    /// Returns `true` when the cation is larger than the anion.
    #[inline]
    pub fn cation_exceeds_anion(&self) -> bool {
        self.ratio > 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_geometry() {
        let c = Classification {
            ratio: 0.55,
            geometry: Geometry::Octahedral,
            within_validity: true,
        };
        assert_eq!(c.coordination_number(), 6);
        assert_eq!(c.geometry_name(), "Octahedral");
        assert!(!c.cation_exceeds_anion());
    }

    #[test]
    fn large_ratio_flags_cation_larger() {
        let c = Classification {
            ratio: 1.3,
            geometry: Geometry::Cuboctahedral,
            within_validity: false,
        };
        assert!(c.cation_exceeds_anion());
        assert_eq!(c.coordination_number(), 12);
    }
}
