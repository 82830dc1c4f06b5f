use super::{between_inclusive, min_max, FuzzyPredicates, Predicates, Vector2};
use crate::core::traits::Real;

/// Returns true if `q` lies within the axis aligned bounding box of `p` and `r`, with the box
/// widened by the length `eps` on every side.
///
/// `eps` is a distance, unlike the area tolerance of [orientation_eps](super::orientation_eps),
/// and is not used by the intersection or membership tests (they use the closed box of
/// [on_segment]).
///
/// This is a bounding box containment check and not a collinearity check, it is only meaningful
/// after [orientation_eps](super::orientation_eps) reported `p`, `q`, `r` as collinear. For a point
/// off the line through `p` and `r` it can return true.
///
/// # Examples
///
/// ```
/// # use ray_polygon::core::math::*;
/// let p = Vector2::new(0.0, 0.0);
/// let r = Vector2::new(10.0, 0.0);
/// assert!(on_segment_eps(p, Vector2::new(5.0, 0.0), r, 1e-8));
/// assert!(on_segment_eps(p, Vector2::new(10.0, 0.0), r, 1e-8));
/// assert!(!on_segment_eps(p, Vector2::new(10.5, 0.0), r, 1e-8));
/// ```
#[inline]
pub fn on_segment_eps<T>(p: Vector2<T>, q: Vector2<T>, r: Vector2<T>, eps: T) -> bool
where
    T: Real,
{
    let (min_x, max_x) = min_max(p.x, r.x);
    let (min_y, max_y) = min_max(p.y, r.y);
    between_inclusive(q.x, min_x - eps, max_x + eps)
        && between_inclusive(q.y, min_y - eps, max_y + eps)
}

/// Returns true if `q` lies within the closed axis aligned bounding box of `p` and `r`
/// (`min <= q <= max` on both axes).
///
/// Only meaningful after `p`, `q`, `r` were found collinear, see [on_segment_eps].
///
/// # Examples
///
/// ```
/// # use ray_polygon::core::math::*;
/// let p = Vector2::new(0.0, 0.0);
/// let r = Vector2::new(4.0, 0.0);
/// assert!(on_segment(p, Vector2::new(4.0, 0.0), r));
/// assert!(!on_segment(p, Vector2::new(-0.5, 0.0), r));
/// ```
#[inline]
pub fn on_segment<T>(p: Vector2<T>, q: Vector2<T>, r: Vector2<T>) -> bool
where
    T: Real,
{
    between_inclusive(q.x, p.x, r.x) && between_inclusive(q.y, p.y, r.y)
}

/// Returns true if line segment `p1 -> q1` and line segment `p2 -> q2` intersect, using `eps` as
/// the zero tolerance of the orientation values. Containment of collinear endpoints is tested
/// against the closed bounding box ([on_segment]).
///
/// Intersections include proper crossings, an endpoint touching the other segment, and collinear
/// segments that overlap. See [Predicates::segments_intersect].
///
/// # Examples
///
/// ```
/// # use ray_polygon::core::math::*;
/// let p1 = Vector2::new(0.0, 0.0);
/// let q1 = Vector2::new(10.0, 0.0);
/// // crossing
/// assert!(segments_intersect_eps(p1, q1, Vector2::new(5.0, -5.0), Vector2::new(5.0, 5.0), 1e-8));
/// // collinear and overlapping
/// assert!(segments_intersect_eps(p1, q1, Vector2::new(5.0, 0.0), Vector2::new(15.0, 0.0), 1e-8));
/// // collinear and disjoint
/// assert!(!segments_intersect_eps(p1, q1, Vector2::new(11.0, 0.0), Vector2::new(15.0, 0.0), 1e-8));
/// // parallel
/// assert!(!segments_intersect_eps(p1, q1, Vector2::new(0.0, 1.0), Vector2::new(10.0, 1.0), 1e-8));
/// ```
#[inline]
pub fn segments_intersect_eps<T>(
    p1: Vector2<T>,
    q1: Vector2<T>,
    p2: Vector2<T>,
    q2: Vector2<T>,
    eps: T,
) -> bool
where
    T: Real,
{
    FuzzyPredicates::new(eps).segments_intersect(p1, q1, p2, q2)
}

/// Same as [segments_intersect_eps] using default epsilon.
///
/// Default epsilon is [fuzzy_epsilon](crate::core::traits::FuzzyEq::fuzzy_epsilon)
/// from [FuzzyEq](crate::core::traits::FuzzyEq) trait.
#[inline]
pub fn segments_intersect<T>(p1: Vector2<T>, q1: Vector2<T>, p2: Vector2<T>, q2: Vector2<T>) -> bool
where
    T: Real,
{
    segments_intersect_eps(p1, q1, p2, q2, T::fuzzy_epsilon())
}
