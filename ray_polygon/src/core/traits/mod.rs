//! Core/common traits for use in ray_polygon.
mod fuzzy_eq;
mod real;

pub use fuzzy_eq::FuzzyEq;
pub use real::Real;
