use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown coordination geometry: '{0}'")]
pub struct ParseGeometryError(String);

/// Coordination polyhedron predicted by the radius-ratio rules.
///
/// Variants are declared in ascending order of coordination number, so the
/// derived `Ord` follows the threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Geometry {
    Triangular,
    Tetrahedral,
    Octahedral,
    Cubic,
    Cuboctahedral,
}

impl Geometry {
    pub const ALL: [Geometry; 5] = [
        Geometry::Triangular,
        Geometry::Tetrahedral,
        Geometry::Octahedral,
        Geometry::Cubic,
        Geometry::Cuboctahedral,
    ];

    #[inline]
    pub const fn coordination_number(self) -> u8 {
        match self {
            Geometry::Triangular => 3,
            Geometry::Tetrahedral => 4,
            Geometry::Octahedral => 6,
            Geometry::Cubic => 8,
            Geometry::Cuboctahedral => 12,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Geometry::Triangular => "Triangular",
            Geometry::Tetrahedral => "Tetrahedral",
            Geometry::Octahedral => "Octahedral",
            Geometry::Cubic => "Cubic",
            Geometry::Cuboctahedral => "Cuboctahedral/close-packed",
        }
    }

    /// Minimum r/R at which the cation still touches every surrounding anion.
    pub const fn lower_bound(self) -> f64 {
        match self {
            Geometry::Triangular => 0.155,
            Geometry::Tetrahedral => 0.225,
            Geometry::Octahedral => 0.414,
            Geometry::Cubic => 0.732,
            Geometry::Cuboctahedral => 1.000,
        }
    }

    pub const fn from_coordination_number(nc: u8) -> Option<Self> {
        match nc {
            3 => Some(Geometry::Triangular),
            4 => Some(Geometry::Tetrahedral),
            6 => Some(Geometry::Octahedral),
            8 => Some(Geometry::Cubic),
            12 => Some(Geometry::Cuboctahedral),
            _ => None,
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Geometry {
    type Err = ParseGeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if let Ok(nc) = key.parse::<u8>() {
            return Geometry::from_coordination_number(nc)
                .ok_or_else(|| ParseGeometryError(s.to_string()));
        }

        match key.to_ascii_lowercase().as_str() {
            "triangular" | "trigonal" | "tri" => Ok(Geometry::Triangular),
            "tetrahedral" | "tet" => Ok(Geometry::Tetrahedral),
            "octahedral" | "oct" => Ok(Geometry::Octahedral),
            "cubic" | "cub" => Ok(Geometry::Cubic),
            "cuboctahedral" | "cuboctahedral/close-packed" | "close-packed" | "cuboct" => {
                Ok(Geometry::Cuboctahedral)
            }
            _ => Err(ParseGeometryError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordination_numbers_match_table() {
        let ncs: Vec<u8> = Geometry::ALL
            .iter()
            .map(|g| g.coordination_number())
            .collect();
        assert_eq!(ncs, vec![3, 4, 6, 8, 12]);
    }

    #[test]
    fn lower_bounds_strictly_increase() {
        for pair in Geometry::ALL.windows(2) {
            assert!(pair[0].lower_bound() < pair[1].lower_bound());
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn from_coordination_number_roundtrips() {
        for g in Geometry::ALL {
            assert_eq!(
                Geometry::from_coordination_number(g.coordination_number()),
                Some(g)
            );
        }
        assert_eq!(Geometry::from_coordination_number(5), None);
        assert_eq!(Geometry::from_coordination_number(0), None);
    }

    #[test]
    fn display_uses_table_names() {
        assert_eq!(Geometry::Octahedral.to_string(), "Octahedral");
        assert_eq!(
            Geometry::Cuboctahedral.to_string(),
            "Cuboctahedral/close-packed"
        );
    }

    #[test]
    fn parses_names_aliases_and_numbers() {
        assert_eq!("Octahedral".parse::<Geometry>(), Ok(Geometry::Octahedral));
        assert_eq!(" tet ".parse::<Geometry>(), Ok(Geometry::Tetrahedral));
        assert_eq!("close-packed".parse::<Geometry>(), Ok(Geometry::Cuboctahedral));
        assert_eq!("8".parse::<Geometry>(), Ok(Geometry::Cubic));
        assert_eq!("12".parse::<Geometry>(), Ok(Geometry::Cuboctahedral));
    }

    #[test]
    fn rejects_unknown_geometry() {
        let err = "7".parse::<Geometry>().unwrap_err();
        assert_eq!(err.to_string(), "unknown coordination geometry: '7'");
        assert!("hexagonal".parse::<Geometry>().is_err());
    }
}
