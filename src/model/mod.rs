//! Core value types shared by the classifier and the I/O layer.
//!
//! - [`radii`] – The cation/anion radius pair fed into the classifier.
//! - [`geometry`] – The five coordination polyhedra of the radius-ratio rules.
//! - [`classification`] – The result of classifying one radius pair.
//!
//! All types are plain `Copy` values; nothing here holds state between calls.

pub mod classification;
pub mod geometry;
pub mod radii;
