use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polygon vertex: a 2D position plus the integer `key` identifying it within its owning
/// structure.
///
/// Points are immutable once created, read the values through [Point::x], [Point::y],
/// [Point::key] and [Point::pos].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point<T = f64> {
    key: u64,
    x: T,
    y: T,
}

impl<T> Point<T>
where
    T: Real,
{
    #[inline]
    pub fn new(key: u64, x: T, y: T) -> Self {
        Point { key, x, y }
    }

    /// Construct a point from a `[x, y]` slice.
    ///
    /// If the slice does not contain exactly 2 elements then `None` is returned.
    #[inline]
    pub fn from_slice(key: u64, slice: &[T]) -> Option<Self> {
        if let [x, y] = *slice {
            Some(Point::new(key, x, y))
        } else {
            None
        }
    }

    /// Construct a point using a 2D vector as the position.
    #[inline]
    pub fn from_vector2(key: u64, vector2: Vector2<T>) -> Self {
        Point::new(key, vector2.x, vector2.y)
    }

    #[inline]
    pub fn key(&self) -> u64 {
        self.key
    }

    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// Return the position as a 2D vector.
    #[inline]
    pub fn pos(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Returns true if both points have the same key and fuzzy equal positions using
    /// `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.key == other.key && self.pos().fuzzy_eq_eps(other.pos(), fuzzy_epsilon)
    }

    /// Same as [Point::fuzzy_eq_eps] using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}
