use super::{point_in_polygon_opt, Point, PointInsideOptions, VertexPosition};
use crate::core::traits::Real;
use log::debug;
use static_aabb2d_index::{
    StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder, AABB,
};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polygon given by an ordered list of vertexes and the keys of those vertexes.
///
/// The vertexes must be given in traversal order around the boundary (clockwise or counter
/// clockwise), the last vertex connects back to the first. The order is the caller's
/// responsibility and is never validated.
///
/// The key list is derived once at construction (`points_keys()[i] == points()[i].key()`). The
/// polygon owns its vertexes and offers no way to modify them so the two lists always agree.
///
/// # Examples
///
/// ```
/// # use ray_polygon::polygon::*;
/// # use ray_polygon::core::math::*;
/// let polygon = Polygon::new(vec![
///     Point::new(10, 0.0, 0.0),
///     Point::new(11, 4.0, 0.0),
///     Point::new(12, 4.0, 4.0),
///     Point::new(13, 0.0, 4.0),
/// ]);
/// assert_eq!(polygon.points_keys(), &[10, 11, 12, 13]);
/// assert!(polygon.is_inside(Vector2::new(2.0, 2.0)));
/// assert!(!polygon.is_inside(Vector2::new(5.0, 5.0)));
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        from = "Vec<Point<T>>",
        into = "Vec<Point<T>>",
        bound(serialize = "T: Real + Serialize", deserialize = "T: Real + Deserialize<'de>")
    )
)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon<T = f64> {
    points: Vec<Point<T>>,
    keys: Vec<u64>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Create a polygon from vertexes given in traversal order.
    pub fn new(points: Vec<Point<T>>) -> Self {
        let keys = points.iter().map(Point::key).collect();
        Polygon { points, keys }
    }

    /// The vertexes in traversal order.
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// The vertex keys in the same order as [Polygon::points].
    #[inline]
    pub fn points_keys(&self) -> &[u64] {
        &self.keys
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn at(&self, index: usize) -> Point<T> {
        self.points[index]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Point<T>> {
        self.points.get(index).copied()
    }

    /// Index of the first vertex with the given `key`.
    #[inline]
    pub fn position_of_key(&self, key: u64) -> Option<usize> {
        self.keys.iter().position(|&k| k == key)
    }

    /// Iterate the edges of the polygon as `(start, end)` vertex pairs.
    ///
    /// Edge `i` goes from vertex `i` to vertex `(i + 1) % vertex_count`, the last edge closes the
    /// polygon. A polygon with fewer than 2 vertexes has no edges.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ray_polygon::polygon;
    /// # use ray_polygon::polygon::*;
    /// let triangle = polygon![(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)];
    /// let edge_keys: Vec<_> = triangle.iter_edges().map(|(a, b)| (a.key(), b.key())).collect();
    /// assert_eq!(edge_keys, vec![(0, 1), (1, 2), (2, 0)]);
    /// ```
    pub fn iter_edges(&self) -> impl Iterator<Item = (Point<T>, Point<T>)> + '_ {
        let n = self.points.len();
        let edge_count = if n < 2 { 0 } else { n };
        (0..edge_count).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Compute the axis aligned bounding box of the polygon.
    ///
    /// Returns `None` if the polygon has no vertexes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ray_polygon::polygon;
    /// # use ray_polygon::polygon::*;
    /// # use ray_polygon::core::traits::*;
    /// let empty: Polygon = Polygon::new(Vec::new());
    /// assert_eq!(empty.extents(), None);
    ///
    /// let triangle = polygon![(0.0, 0.0), (10.0, -1.0), (5.0, 10.0)];
    /// let extents = triangle.extents().unwrap();
    /// assert!(extents.min_x.fuzzy_eq(0.0));
    /// assert!(extents.min_y.fuzzy_eq(-1.0));
    /// assert!(extents.max_x.fuzzy_eq(10.0));
    /// assert!(extents.max_y.fuzzy_eq(10.0));
    /// ```
    pub fn extents(&self) -> Option<AABB<T>> {
        let first = self.points.first()?;
        let mut result = AABB::new(first.x(), first.y(), first.x(), first.y());
        for p in &self.points[1..] {
            result.min_x = num_traits::real::Real::min(result.min_x, p.x());
            result.min_y = num_traits::real::Real::min(result.min_y, p.y());
            result.max_x = num_traits::real::Real::max(result.max_x, p.x());
            result.max_y = num_traits::real::Real::max(result.max_y, p.y());
        }

        Some(result)
    }

    /// Creates a spatial index of all the polygon edges.
    ///
    /// The edge start vertex index is used as the key to the edge bounding box in the
    /// `StaticAABB2DIndex`. Pass it through [PointInsideOptions::aabb_index] to only test the edges
    /// near the ray when repeatedly querying a polygon with many vertexes.
    ///
    /// # Panics
    ///
    /// Panics if `T` fails to cast to/from a `u16`.
    pub fn create_aabb_index(&self) -> StaticAABB2DIndex<T> {
        let n = self.points.len();
        let edge_count = if n < 2 { 0 } else { n };
        let mut builder = StaticAABB2DIndexBuilder::new(edge_count);
        for (v1, v2) in self.iter_edges() {
            let min_x = num_traits::real::Real::min(v1.x(), v2.x());
            let min_y = num_traits::real::Real::min(v1.y(), v2.y());
            let max_x = num_traits::real::Real::max(v1.x(), v2.x());
            let max_y = num_traits::real::Real::max(v1.y(), v2.y());
            builder.add(min_x, min_y, max_x, max_y);
        }

        debug!("built polygon edge spatial index with {edge_count} edges");
        unwrap_spatial_index(builder)
    }

    /// Test if `point` lies inside or on the boundary of this polygon.
    ///
    /// Uses ray casting with default [PointInsideOptions]. See
    /// [point_in_polygon_opt](super::point_in_polygon_opt) for the exact rules.
    #[inline]
    pub fn is_inside<P>(&self, point: P) -> bool
    where
        P: VertexPosition<Num = T>,
    {
        point_in_polygon_opt(&self.points, point, &PointInsideOptions::new())
    }

    /// Same as [Polygon::is_inside] with options given.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ray_polygon::polygon;
    /// # use ray_polygon::polygon::*;
    /// # use ray_polygon::core::math::*;
    /// let triangle = polygon![(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)];
    /// let aabb_index = triangle.create_aabb_index();
    /// let options = PointInsideOptions {
    ///     aabb_index: Some(&aabb_index),
    ///     ..Default::default()
    /// };
    /// assert!(triangle.is_inside_opt(Vector2::new(5.0, 3.0), &options));
    /// assert!(!triangle.is_inside_opt(Vector2::new(20.0, 0.0), &options));
    /// ```
    #[inline]
    pub fn is_inside_opt<P>(&self, point: P, options: &PointInsideOptions<T>) -> bool
    where
        P: VertexPosition<Num = T>,
    {
        point_in_polygon_opt(&self.points, point, options)
    }

    /// Consume the polygon returning its vertexes.
    #[inline]
    pub fn into_points(self) -> Vec<Point<T>> {
        self.points
    }
}

impl<T> Index<usize> for Polygon<T> {
    type Output = Point<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> From<Vec<Point<T>>> for Polygon<T>
where
    T: Real,
{
    #[inline]
    fn from(points: Vec<Point<T>>) -> Self {
        Polygon::new(points)
    }
}

impl<T> From<Polygon<T>> for Vec<Point<T>> {
    #[inline]
    fn from(polygon: Polygon<T>) -> Self {
        polygon.points
    }
}

impl<T> FromIterator<Point<T>> for Polygon<T>
where
    T: Real,
{
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        Polygon::new(iter.into_iter().collect())
    }
}

/// Helper function to unwrap a spatial index from a builder or panic for the unexpected case of
/// failure.
fn unwrap_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: Real,
{
    match builder.build() {
        Ok(x) => x,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("internal library error: count mismatch when building spatial index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast coordinate type: {e}")
            }
        },
    }
}
