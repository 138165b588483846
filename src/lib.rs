//! A small, pure Rust library for Pauling's radius-ratio rules.
//! Given the radius of a cation and of the anions surrounding it, it predicts the
//! coordination number (NC) and coordination polyhedron of an ionic solid under
//! the rigid-sphere model.
//!
//! # Features
//!
//! - **Classification** — r/R mapped onto the five Pauling bands
//!   (triangular, tetrahedral, octahedral, cubic, close-packed)
//! - **Derived quantities** — 2D/3D transition radius and a normalized scale
//!   position for progress-style indicators
//! - **Anion sweeps** — the ratio-vs-anion-radius curve at fixed cation radius
//! - **Batch I/O** — TOML input of radius pairs; CSV/TSV output
//!
//! # Quick Start
//!
//! ```
//! use radius_ratio::{Geometry, classify, scale_position};
//!
//! // Na⁺ in a NaCl-like lattice
//! let nacl = classify(0.55, 1.0);
//! assert_eq!(nacl.coordination_number(), 6);
//! assert_eq!(nacl.geometry, Geometry::Octahedral);
//! assert!((scale_position(nacl.ratio) - 0.5).abs() < 1e-9);
//!
//! // Equal radii: the ratio sits exactly on the last bound
//! assert_eq!(classify(1.0, 1.0).coordination_number(), 12);
//!
//! // A non-positive anion radius yields the sentinel ratio 0
//! let degenerate = classify(1.0, 0.0);
//! assert_eq!(degenerate.ratio, 0.0);
//! assert_eq!(degenerate.coordination_number(), 3);
//! ```
//!
//! Strict validation is opt-in through [`ClassifyConfig`]:
//!
//! ```
//! use radius_ratio::{ClassifyConfig, ClassifyError, IonicRadii, classify_with};
//!
//! let strict = ClassifyConfig::strict();
//! let err = classify_with(IonicRadii::new(1.0, 0.0), &strict).unwrap_err();
//! assert!(matches!(err, ClassifyError::InvalidRadius { .. }));
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Batch TOML reader and CSV/TSV writers
//! - [`classify`] — Main classification function
//! - [`THRESHOLDS`] — The immutable Pauling threshold table
//!
//! # Data Types
//!
//! - [`IonicRadii`] — Cation/anion radius pair
//! - [`Geometry`] — One of the five coordination polyhedra
//! - [`Classification`] — Ratio, geometry, and physical-validity flag
//! - [`Band`] — Ratio interval mapped to one geometry
//! - [`SweepConfig`] / [`SweepPoint`] — Anion sweep range and samples

mod classify;
mod model;

pub mod io;

pub use model::classification::Classification;
pub use model::geometry::{Geometry, ParseGeometryError};
pub use model::radii::{Ion, IonicRadii};

pub use classify::{
    Band, ClassifyConfig, DEFAULT_ANION_MAX, DEFAULT_ANION_MIN, DEFAULT_SCALE_CEILING,
    DEFAULT_SWEEP_STEP, DEFAULT_VALIDITY_LIMIT, DegeneratePolicy, MAX_SWEEP_POINTS, SweepConfig,
    SweepPoint, THRESHOLDS, TRANSITION_THRESHOLD, Threshold, bands, classify, classify_ratio,
    classify_with, markers, scale_position, scale_position_with, sweep, transition_anion_radius,
};

pub use classify::Error as ClassifyError;
