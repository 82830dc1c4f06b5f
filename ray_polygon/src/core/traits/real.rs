use super::FuzzyEq;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number coordinate (e.g. 1.1, -3.5, etc.) that can be fuzzy compared
/// and stored in a spatial index.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyEq
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
}

impl Real for f32 {}

impl Real for f64 {}
