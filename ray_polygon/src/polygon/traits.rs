//! Trait used to accept any vertex representation in the membership test.
use super::Point;
use crate::core::{math::Vector2, traits::Real};

/// Anything that has a 2D position usable as a polygon vertex or query point.
///
/// Implemented for [Vector2] and [Point], so the free function
/// [point_in_polygon](super::point_in_polygon) accepts plain positions as well as keyed points.
pub trait VertexPosition {
    type Num: Real;

    fn pos(&self) -> Vector2<Self::Num>;
}

impl<T> VertexPosition for Vector2<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn pos(&self) -> Vector2<T> {
        *self
    }
}

impl<T> VertexPosition for Point<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn pos(&self) -> Vector2<T> {
        Point::pos(self)
    }
}

impl<V> VertexPosition for &V
where
    V: VertexPosition + ?Sized,
{
    type Num = V::Num;

    #[inline]
    fn pos(&self) -> Vector2<Self::Num> {
        (**self).pos()
    }
}
