use crate::model::geometry::Geometry;

/// Critical ratio of the triangular-to-tetrahedral transition.
pub const TRANSITION_THRESHOLD: f64 = Geometry::Tetrahedral.lower_bound();

/// One row of the Pauling threshold table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub lower_bound: f64,
    pub geometry: Geometry,
}

impl Threshold {
    const fn of(geometry: Geometry) -> Self {
        Self {
            lower_bound: geometry.lower_bound(),
            geometry,
        }
    }

    #[inline]
    pub fn coordination_number(&self) -> u8 {
        self.geometry.coordination_number()
    }
}

/// Lower bounds in strictly ascending order.
pub const THRESHOLDS: [Threshold; 5] = [
    Threshold::of(Geometry::Triangular),
    Threshold::of(Geometry::Tetrahedral),
    Threshold::of(Geometry::Octahedral),
    Threshold::of(Geometry::Cubic),
    Threshold::of(Geometry::Cuboctahedral),
];

/// Half-open ratio interval `[lower, upper)` mapped to one geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub lower: f64,
    /// `None` for the open-ended close-packed band.
    pub upper: Option<f64>,
    pub geometry: Geometry,
}

impl Band {
    pub fn contains(&self, ratio: f64) -> bool {
        ratio >= self.lower && self.upper.is_none_or(|upper| ratio < upper)
    }
}

/// Maps a ratio onto the table.
///
/// The first lower bound strictly greater than `ratio` closes the band, so
/// the prediction is the entry just before it. Ratios below the first bound
/// stay in the first band; ratios at or above the last bound take the last
/// entry with no upper limit.
pub(crate) fn lookup(ratio: f64) -> Geometry {
    match THRESHOLDS.iter().position(|t| ratio < t.lower_bound) {
        Some(0) => THRESHOLDS[0].geometry,
        Some(i) => THRESHOLDS[i - 1].geometry,
        None => THRESHOLDS[THRESHOLDS.len() - 1].geometry,
    }
}

/// Stability bands in table order. The first band starts at zero and the
/// last is open-ended.
pub fn bands() -> [Band; 5] {
    std::array::from_fn(|i| Band {
        lower: if i == 0 { 0.0 } else { THRESHOLDS[i].lower_bound },
        upper: THRESHOLDS.get(i + 1).map(|next| next.lower_bound),
        geometry: THRESHOLDS[i].geometry,
    })
}

/// Caption listing every lower bound with its coordination number.
pub fn markers() -> String {
    THRESHOLDS
        .iter()
        .map(|t| format!("{:.3} (NC={})", t.lower_bound, t.coordination_number()))
        .collect::<Vec<_>>()
        .join(" | ")
}
