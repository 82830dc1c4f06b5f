//! Supporting public types used by the polygon membership test.

use crate::core::traits::Real;
use static_aabb2d_index::StaticAABB2DIndex;

/// Struct to hold options parameters when testing if a point is inside a polygon.
#[derive(Debug, Clone)]
pub struct PointInsideOptions<'a, T>
where
    T: Real,
{
    /// Spatial index of all the polygon edge bounding boxes, as created by
    /// [Polygon::create_aabb_index](super::Polygon::create_aabb_index). If `None` is given then
    /// every edge is tested against the ray, if given then only edges whose bounding box overlaps
    /// the ray are tested. The index must have been built from the same vertexes the query runs
    /// on (edge `i` keyed by its start vertex index `i`), otherwise results are meaningless;
    /// candidates past the last vertex are skipped. The query box is widened by `collinear_eps`,
    /// results only differ from the full walk for points within tolerance of a very short edge.
    pub aabb_index: Option<&'a StaticAABB2DIndex<T>>,
    /// Zero tolerance for orientation values. Bounding box containment of a collinear point is
    /// closed and does not use it.
    pub collinear_eps: T,
}

impl<'a, T> PointInsideOptions<'a, T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            aabb_index: None,
            collinear_eps: T::fuzzy_epsilon(),
        }
    }
}

impl<'a, T> Default for PointInsideOptions<'a, T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
