//! The family of geometric objects: points, segments and polygons as one tagged union.
//!
//! Code that stores or dispatches over mixed shapes uses [Geometry], code that only deals with one
//! kind uses the concrete type directly.

use crate::{
    core::{
        math::{on_segment, orientation_eps, segments_intersect_eps, Vector2},
        traits::Real,
    },
    polygon::{Point, PointInsideOptions, Polygon, VertexPosition},
};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discriminant identifying the variant of a [Geometry].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum GeometryKind {
    Point = 1,
    Segment = 2,
    Polygon = 3,
}

impl GeometryKind {
    /// Stable integer code of the kind.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ray_polygon::geometry::*;
    /// assert_eq!(GeometryKind::Polygon.code(), 3);
    /// assert_eq!(GeometryKind::from_code(3), Some(GeometryKind::Polygon));
    /// assert_eq!(GeometryKind::from_code(0), None);
    /// ```
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(GeometryKind::Point),
            2 => Some(GeometryKind::Segment),
            3 => Some(GeometryKind::Polygon),
            _ => None,
        }
    }
}

/// A line segment between two keyed points.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Segment<T = f64> {
    start: Point<T>,
    end: Point<T>,
}

impl<T> Segment<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Point<T>, end: Point<T>) -> Self {
        Segment { start, end }
    }

    #[inline]
    pub fn start(&self) -> Point<T> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point<T> {
        self.end
    }

    /// Returns true if this segment and `other` share at least one point, using `eps` as the
    /// collinear tolerance.
    #[inline]
    pub fn intersects_eps(&self, other: &Segment<T>, eps: T) -> bool {
        segments_intersect_eps(
            self.start.pos(),
            self.end.pos(),
            other.start.pos(),
            other.end.pos(),
            eps,
        )
    }

    /// Same as [Segment::intersects_eps] using T::fuzzy_epsilon().
    #[inline]
    pub fn intersects(&self, other: &Segment<T>) -> bool {
        self.intersects_eps(other, T::fuzzy_epsilon())
    }

    /// Returns true if `point` lies on the segment, using `eps` as the collinear tolerance (the
    /// extent check is closed).
    ///
    /// # Examples
    ///
    /// ```
    /// # use ray_polygon::geometry::*;
    /// # use ray_polygon::polygon::*;
    /// # use ray_polygon::core::math::*;
    /// let seg = Segment::new(Point::new(0, 0.0, 0.0), Point::new(1, 10.0, 10.0));
    /// assert!(seg.contains_point_eps(Vector2::new(5.0, 5.0), 1e-8));
    /// assert!(!seg.contains_point_eps(Vector2::new(5.0, 6.0), 1e-8));
    /// assert!(!seg.contains_point_eps(Vector2::new(11.0, 11.0), 1e-8));
    /// ```
    #[inline]
    pub fn contains_point_eps(&self, point: Vector2<T>, eps: T) -> bool {
        let (start, end) = (self.start.pos(), self.end.pos());
        orientation_eps(start, point, end, eps).is_collinear()
            && on_segment(start, point, end)
    }

    fn extents(&self) -> AABB<T> {
        let (s, e) = (self.start.pos(), self.end.pos());
        AABB::new(
            num_traits::real::Real::min(s.x, e.x),
            num_traits::real::Real::min(s.y, e.y),
            num_traits::real::Real::max(s.x, e.x),
            num_traits::real::Real::max(s.y, e.y),
        )
    }
}

/// A geometric object of any supported kind.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        tag = "kind",
        content = "data",
        bound(serialize = "T: Real + Serialize", deserialize = "T: Real + Deserialize<'de>")
    )
)]
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry<T = f64> {
    Point(Point<T>),
    Segment(Segment<T>),
    Polygon(Polygon<T>),
}

impl<T> Geometry<T>
where
    T: Real,
{
    /// The kind discriminant of this geometry.
    #[inline]
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::Segment(_) => GeometryKind::Segment,
            Geometry::Polygon(_) => GeometryKind::Polygon,
        }
    }

    /// Keys of all the points making up this geometry, in order.
    pub fn keys(&self) -> Vec<u64> {
        match self {
            Geometry::Point(p) => vec![p.key()],
            Geometry::Segment(s) => vec![s.start().key(), s.end().key()],
            Geometry::Polygon(pg) => pg.points_keys().to_vec(),
        }
    }

    /// Axis aligned bounding box, `None` for an empty polygon.
    pub fn extents(&self) -> Option<AABB<T>> {
        match self {
            Geometry::Point(p) => Some(AABB::new(p.x(), p.y(), p.x(), p.y())),
            Geometry::Segment(s) => Some(s.extents()),
            Geometry::Polygon(pg) => pg.extents(),
        }
    }

    /// Returns true if `point` lies on or inside this geometry, using `eps` as the tolerance.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ray_polygon::polygon;
    /// # use ray_polygon::geometry::*;
    /// # use ray_polygon::polygon::*;
    /// # use ray_polygon::core::math::*;
    /// let shapes: Vec<Geometry> = vec![
    ///     Point::new(0, 1.0, 1.0).into(),
    ///     Segment::new(Point::new(1, 0.0, 0.0), Point::new(2, 2.0, 2.0)).into(),
    ///     polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)].into(),
    /// ];
    /// let hits = shapes
    ///     .iter()
    ///     .filter(|g| g.contains_point_eps(Vector2::new(1.0, 1.0), 1e-8))
    ///     .count();
    /// assert_eq!(hits, 3);
    /// ```
    pub fn contains_point_eps<P>(&self, point: P, eps: T) -> bool
    where
        P: VertexPosition<Num = T>,
    {
        let point = point.pos();
        match self {
            Geometry::Point(p) => p.pos().fuzzy_eq_eps(point, eps),
            Geometry::Segment(s) => s.contains_point_eps(point, eps),
            Geometry::Polygon(pg) => pg.is_inside_opt(
                point,
                &PointInsideOptions {
                    collinear_eps: eps,
                    ..Default::default()
                },
            ),
        }
    }

    /// Same as [Geometry::contains_point_eps] using T::fuzzy_epsilon().
    #[inline]
    pub fn contains_point<P>(&self, point: P) -> bool
    where
        P: VertexPosition<Num = T>,
    {
        self.contains_point_eps(point, T::fuzzy_epsilon())
    }
}

impl<T> From<Point<T>> for Geometry<T> {
    #[inline]
    fn from(value: Point<T>) -> Self {
        Geometry::Point(value)
    }
}

impl<T> From<Segment<T>> for Geometry<T> {
    #[inline]
    fn from(value: Segment<T>) -> Self {
        Geometry::Segment(value)
    }
}

impl<T> From<Polygon<T>> for Geometry<T> {
    #[inline]
    fn from(value: Polygon<T>) -> Self {
        Geometry::Polygon(value)
    }
}
