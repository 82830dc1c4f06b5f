use super::{on_segment, orientation_eps, Orientation, Vector2};
use crate::core::traits::Real;

/// The set of planar predicates the ray casting membership test is built on.
///
/// Implementations decide the position type and how the collinear case is decided (fuzzy
/// tolerance for floating point, exact arithmetic for integers). The segment intersection test is
/// provided in terms of [Predicates::orientation] and [Predicates::on_segment].
pub trait Predicates {
    /// Position type the predicates operate on.
    type Pos: Copy;

    /// Orientation of the ordered triplet `(p, q, r)`.
    fn orientation(&self, p: Self::Pos, q: Self::Pos, r: Self::Pos) -> Orientation;

    /// Returns true if `q` lies within the bounding box of `p` and `r`.
    ///
    /// Only meaningful when `p`, `q`, `r` are already known to be collinear.
    fn on_segment(&self, p: Self::Pos, q: Self::Pos, r: Self::Pos) -> bool;

    /// Returns true if segment `p1 -> q1` and segment `p2 -> q2` share at least one point.
    ///
    /// Proper crossings are found by the endpoints of each segment lying on different sides of the
    /// other segment. Touching and overlapping configurations are found by checking each endpoint
    /// that is collinear with the other segment for containment in it.
    fn segments_intersect(
        &self,
        p1: Self::Pos,
        q1: Self::Pos,
        p2: Self::Pos,
        q2: Self::Pos,
    ) -> bool {
        let o1 = self.orientation(p1, q1, p2);
        let o2 = self.orientation(p1, q1, q2);
        let o3 = self.orientation(p2, q2, p1);
        let o4 = self.orientation(p2, q2, q1);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        // p2 lies on p1 -> q1
        if o1.is_collinear() && self.on_segment(p1, p2, q1) {
            return true;
        }

        // q2 lies on p1 -> q1
        if o2.is_collinear() && self.on_segment(p1, q2, q1) {
            return true;
        }

        // p1 lies on p2 -> q2
        if o3.is_collinear() && self.on_segment(p2, p1, q2) {
            return true;
        }

        // q1 lies on p2 -> q2
        o4.is_collinear() && self.on_segment(p2, q1, q2)
    }
}

/// Floating point predicates using a fixed zero tolerance for orientation values, bounding box
/// containment is closed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FuzzyPredicates<T> {
    /// Zero tolerance applied to orientation values.
    pub collinear_eps: T,
}

impl<T> FuzzyPredicates<T>
where
    T: Real,
{
    #[inline]
    pub fn new(collinear_eps: T) -> Self {
        Self { collinear_eps }
    }
}

impl<T> Default for FuzzyPredicates<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new(T::fuzzy_epsilon())
    }
}

impl<T> Predicates for FuzzyPredicates<T>
where
    T: Real,
{
    type Pos = Vector2<T>;

    #[inline]
    fn orientation(&self, p: Vector2<T>, q: Vector2<T>, r: Vector2<T>) -> Orientation {
        orientation_eps(p, q, r, self.collinear_eps)
    }

    #[inline]
    fn on_segment(&self, p: Vector2<T>, q: Vector2<T>, r: Vector2<T>) -> bool {
        on_segment(p, q, r)
    }
}
