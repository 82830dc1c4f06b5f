//! Core module has the shared numeric traits and the planar predicates everything else is built on.
pub mod math;
pub mod traits;
