//! Exact predicates for integer coordinates.
//!
//! Positions are `[x, y]` pairs of `i64`. Orientation values are computed in `i128` so the
//! collinear test is exact and never overflows for coordinates within [EXACT_COORD_LIMIT].

use super::{between_inclusive, Orientation, Predicates};

/// Inclusive bound on the magnitude of coordinates accepted by the exact predicates.
///
/// Coordinate differences then stay within `2^62` and the cross product terms within `2^124`,
/// well inside `i128`.
pub const EXACT_COORD_LIMIT: i64 = 1 << 61;

#[inline]
fn in_exact_limit(p: [i64; 2]) -> bool {
    let limit = EXACT_COORD_LIMIT.unsigned_abs();
    p[0].unsigned_abs() <= limit && p[1].unsigned_abs() <= limit
}

#[inline]
fn assert_in_limit(p: [i64; 2]) {
    assert!(
        in_exact_limit(p),
        "coordinate exceeds exact predicate limit: {p:?}"
    );
}

/// Exact counterpart of [orientation_value](super::orientation_value).
///
/// # Panics
///
/// Panics if any coordinate magnitude exceeds [EXACT_COORD_LIMIT].
#[inline]
pub fn orientation_value_exact(p: [i64; 2], q: [i64; 2], r: [i64; 2]) -> i128 {
    assert_in_limit(p);
    assert_in_limit(q);
    assert_in_limit(r);
    let [px, py] = p.map(i128::from);
    let [qx, qy] = q.map(i128::from);
    let [rx, ry] = r.map(i128::from);
    (qy - py) * (rx - qx) - (qx - px) * (ry - qy)
}

/// Exact orientation of the ordered triplet `(p, q, r)` for integer coordinates.
///
/// # Panics
///
/// Panics if any coordinate magnitude exceeds [EXACT_COORD_LIMIT].
///
/// # Examples
///
/// ```
/// # use ray_polygon::core::math::*;
/// assert_eq!(orientation_exact([0, 0], [4, 0], [4, 4]), Orientation::CounterClockwise);
/// assert_eq!(orientation_exact([0, 0], [4, 0], [4, -4]), Orientation::Clockwise);
/// assert_eq!(orientation_exact([0, 0], [4, 0], [400, 0]), Orientation::Collinear);
/// ```
#[inline]
pub fn orientation_exact(p: [i64; 2], q: [i64; 2], r: [i64; 2]) -> Orientation {
    match orientation_value_exact(p, q, r).signum() {
        0 => Orientation::Collinear,
        1 => Orientation::Clockwise,
        _ => Orientation::CounterClockwise,
    }
}

/// Exact counterpart of [on_segment](super::on_segment) (a closed bounding box test).
#[inline]
pub fn on_segment_exact(p: [i64; 2], q: [i64; 2], r: [i64; 2]) -> bool {
    between_inclusive(q[0], p[0], r[0]) && between_inclusive(q[1], p[1], r[1])
}

/// Exact counterpart of [segments_intersect_eps](super::segments_intersect_eps).
///
/// # Panics
///
/// Panics if any coordinate magnitude exceeds [EXACT_COORD_LIMIT].
///
/// # Examples
///
/// ```
/// # use ray_polygon::core::math::*;
/// assert!(segments_intersect_exact([0, 0], [10, 0], [5, 0], [15, 0]));
/// assert!(segments_intersect_exact([0, 0], [10, 10], [0, 10], [10, 0]));
/// assert!(!segments_intersect_exact([0, 0], [10, 0], [11, 0], [15, 0]));
/// ```
#[inline]
pub fn segments_intersect_exact(p1: [i64; 2], q1: [i64; 2], p2: [i64; 2], q2: [i64; 2]) -> bool {
    ExactPredicates.segments_intersect(p1, q1, p2, q2)
}

/// Predicates over integer positions with exact arithmetic.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ExactPredicates;

impl Predicates for ExactPredicates {
    type Pos = [i64; 2];

    #[inline]
    fn orientation(&self, p: [i64; 2], q: [i64; 2], r: [i64; 2]) -> Orientation {
        orientation_exact(p, q, r)
    }

    #[inline]
    fn on_segment(&self, p: [i64; 2], q: [i64; 2], r: [i64; 2]) -> bool {
        on_segment_exact(p, q, r)
    }
}
