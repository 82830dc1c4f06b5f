use super::Vector2;
use crate::core::traits::Real;

/// Rotational sense of an ordered triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The three points lie on a common line (within the tolerance used).
    Collinear,
    /// Turning from `p -> q` to `q -> r` is a clockwise turn.
    Clockwise,
    /// Turning from `p -> q` to `q -> r` is a counter clockwise turn.
    CounterClockwise,
}

impl Orientation {
    /// Returns the orientation of the triplet traversed in the opposite direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ray_polygon::core::math::*;
    /// assert_eq!(Orientation::Clockwise.reversed(), Orientation::CounterClockwise);
    /// assert_eq!(Orientation::Collinear.reversed(), Orientation::Collinear);
    /// ```
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Collinear => Orientation::Collinear,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }

    /// Returns true if the orientation is [Orientation::Collinear].
    #[inline]
    pub fn is_collinear(self) -> bool {
        self == Orientation::Collinear
    }
}

/// Signed value whose sign gives the orientation of the triplet `(p, q, r)`.
///
/// Computed as `(q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)`: positive for clockwise,
/// negative for counter clockwise, zero for collinear. The magnitude is twice the area of the
/// triangle `p, q, r`.
#[inline]
pub fn orientation_value<T>(p: Vector2<T>, q: Vector2<T>, r: Vector2<T>) -> T
where
    T: Real,
{
    (r - q).perp_dot(q - p)
}

/// Find the orientation of the ordered triplet `(p, q, r)` using `collinear_eps` as the zero
/// tolerance.
///
/// The triplet is [Orientation::Collinear] when `|orientation_value(p, q, r)| < collinear_eps`.
/// Note the value scales with the square of the coordinate magnitudes so `collinear_eps` should be
/// chosen relative to the input extents. A `collinear_eps` of `1.0` classifies exactly the values
/// that truncate to integer zero as collinear.
///
/// # Examples
///
/// ```
/// # use ray_polygon::core::math::*;
/// let p = Vector2::new(0.0, 0.0);
/// let q = Vector2::new(4.0, 0.0);
/// assert_eq!(orientation_eps(p, q, Vector2::new(4.0, 4.0), 1e-8), Orientation::CounterClockwise);
/// assert_eq!(orientation_eps(p, q, Vector2::new(4.0, -4.0), 1e-8), Orientation::Clockwise);
/// assert_eq!(orientation_eps(p, q, Vector2::new(8.0, 0.0), 1e-8), Orientation::Collinear);
///
/// // nearly collinear: value is -0.4, truncates to zero
/// let r = Vector2::new(8.0, 0.1);
/// assert_eq!(orientation_eps(p, q, r, 1e-8), Orientation::CounterClockwise);
/// assert_eq!(orientation_eps(p, q, r, 1.0), Orientation::Collinear);
/// ```
#[inline]
pub fn orientation_eps<T>(p: Vector2<T>, q: Vector2<T>, r: Vector2<T>, collinear_eps: T) -> Orientation
where
    T: Real,
{
    let val = orientation_value(p, q, r);
    if val.fuzzy_eq_zero_eps(collinear_eps) {
        Orientation::Collinear
    } else if val > T::zero() {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Same as [orientation_eps] using default epsilon.
///
/// Default epsilon is [fuzzy_epsilon](crate::core::traits::FuzzyEq::fuzzy_epsilon)
/// from [FuzzyEq](crate::core::traits::FuzzyEq) trait.
#[inline]
pub fn orientation<T>(p: Vector2<T>, q: Vector2<T>, r: Vector2<T>) -> Orientation
where
    T: Real,
{
    orientation_eps(p, q, r, T::fuzzy_epsilon())
}
