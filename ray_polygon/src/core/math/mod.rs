//! Planar predicates: triplet orientation, on-segment containment, and segment intersection.
mod base_math;
mod exact;
mod orientation;
mod predicates;
mod segment_intersect;
mod vector2;

pub use base_math::*;
pub use exact::{
    on_segment_exact, orientation_exact, orientation_value_exact, segments_intersect_exact,
    ExactPredicates, EXACT_COORD_LIMIT,
};
pub use orientation::{orientation, orientation_eps, orientation_value, Orientation};
pub use predicates::{FuzzyPredicates, Predicates};
pub use segment_intersect::{on_segment, on_segment_eps, segments_intersect, segments_intersect_eps};
pub use vector2::{vec2, Vector2};
