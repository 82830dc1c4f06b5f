use super::{internal::ray_cast::ray_cast, PointInsideOptions, VertexPosition};
use crate::core::{
    math::{ExactPredicates, FuzzyPredicates, Vector2, EXACT_COORD_LIMIT},
    traits::Real,
};
use log::trace;

/// End point of the ray segment cast from `point` in the +x direction.
///
/// The ray must reach past every vertex, it ends `max(1, x span)` beyond the largest x coordinate
/// of the vertexes and the point.
fn ray_end<T, I>(xs: I, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
    I: IntoIterator<Item = T>,
{
    let (min_x, max_x) = xs.into_iter().fold((point.x, point.x), |(min_x, max_x), x| {
        (
            num_traits::real::Real::min(min_x, x),
            num_traits::real::Real::max(max_x, x),
        )
    });
    let margin = num_traits::real::Real::max(max_x - min_x, T::one());
    Vector2::new(max_x + margin, point.y)
}

/// Test if `point` lies inside (or on the boundary of) the polygon described by `vertexes`.
///
/// `vertexes` must be given in a single traversal order around the boundary (clockwise or counter
/// clockwise), the last vertex connects back to the first. The order is not validated and self
/// intersecting input gives undefined results. Use `&vertexes[..n]` to test against the first `n`
/// vertexes only.
///
/// Ray casting: a ray segment from `point` in the +x direction is tested against every edge and
/// the point is inside if it crosses an odd number of edges. If the point is collinear with an edge
/// the ray intersects then that edge alone decides the result: inside if the point lies on the
/// edge, otherwise not inside.
///
/// Fewer than 3 vertexes never enclose a point and always return false.
///
/// # Examples
///
/// ```
/// # use ray_polygon::core::math::*;
/// # use ray_polygon::polygon::*;
/// let square = [
///     Vector2::new(0.0, 0.0),
///     Vector2::new(4.0, 0.0),
///     Vector2::new(4.0, 4.0),
///     Vector2::new(0.0, 4.0),
/// ];
/// let options = PointInsideOptions::new();
/// assert!(point_in_polygon_opt(&square, Vector2::new(2.0, 2.0), &options));
/// assert!(!point_in_polygon_opt(&square, Vector2::new(5.0, 5.0), &options));
/// // boundary counts as inside
/// assert!(point_in_polygon_opt(&square, Vector2::new(2.0, 0.0), &options));
/// // only the first 2 vertexes, no area
/// assert!(!point_in_polygon_opt(&square[..2], Vector2::new(2.0, 0.0), &options));
/// ```
pub fn point_in_polygon_opt<V, P, T>(
    vertexes: &[V],
    point: P,
    options: &PointInsideOptions<T>,
) -> bool
where
    V: VertexPosition<Num = T>,
    P: VertexPosition<Num = T>,
    T: Real,
{
    let vertex_count = vertexes.len();
    if vertex_count < 3 {
        trace!("point in polygon with {vertex_count} vertexes, not enough to enclose area");
        return false;
    }

    let point = point.pos();
    let extreme = ray_end(vertexes.iter().map(|v| v.pos().x), point);
    let predicates = FuzzyPredicates::new(options.collinear_eps);
    let vertex_at = |i: usize| vertexes[i].pos();

    match options.aabb_index {
        Some(aabb_index) => {
            let eps = options.collinear_eps;
            let mut candidates = aabb_index.query(
                point.x - eps,
                point.y - eps,
                extreme.x + eps,
                point.y + eps,
            );
            let queried = candidates.len();
            candidates.retain(|&i| i < vertex_count);
            if candidates.len() != queried {
                trace!(
                    "skipped {} spatial index results past vertex count {vertex_count}",
                    queried - candidates.len()
                );
            }
            // visit in edge order so the first collinear edge matches the full walk
            candidates.sort_unstable();
            trace!(
                "point in polygon testing {} of {vertex_count} edges from spatial index",
                candidates.len()
            );
            ray_cast(&predicates, vertex_count, vertex_at, point, extreme, candidates)
        }
        None => ray_cast(
            &predicates,
            vertex_count,
            vertex_at,
            point,
            extreme,
            0..vertex_count,
        ),
    }
}

/// Same as [point_in_polygon_opt] with default options and the given `collinear_eps`.
#[inline]
pub fn point_in_polygon_eps<V, P, T>(vertexes: &[V], point: P, collinear_eps: T) -> bool
where
    V: VertexPosition<Num = T>,
    P: VertexPosition<Num = T>,
    T: Real,
{
    point_in_polygon_opt(
        vertexes,
        point,
        &PointInsideOptions {
            collinear_eps,
            ..Default::default()
        },
    )
}

/// Same as [point_in_polygon_opt] with default options.
#[inline]
pub fn point_in_polygon<V, P, T>(vertexes: &[V], point: P) -> bool
where
    V: VertexPosition<Num = T>,
    P: VertexPosition<Num = T>,
    T: Real,
{
    point_in_polygon_opt(vertexes, point, &PointInsideOptions::new())
}

/// Exact integer counterpart of [point_in_polygon_opt].
///
/// The ray ends one unit past the largest x coordinate.
///
/// # Panics
///
/// Panics if any coordinate magnitude of `vertexes` or `point` is not strictly less than
/// [EXACT_COORD_LIMIT](crate::core::math::EXACT_COORD_LIMIT).
///
/// # Examples
///
/// ```
/// # use ray_polygon::polygon::*;
/// let triangle = [[0, 0], [10, 0], [5, 10]];
/// assert!(point_in_polygon_exact(&triangle, [5, 3]));
/// assert!(!point_in_polygon_exact(&triangle, [20, 0]));
/// assert!(point_in_polygon_exact(&triangle, [10, 0]));
/// ```
pub fn point_in_polygon_exact(vertexes: &[[i64; 2]], point: [i64; 2]) -> bool {
    let vertex_count = vertexes.len();
    if vertex_count < 3 {
        trace!("point in polygon with {vertex_count} vertexes, not enough to enclose area");
        return false;
    }

    let below_limit = |p: &[i64; 2]| {
        p[0].unsigned_abs() < EXACT_COORD_LIMIT.unsigned_abs()
            && p[1].unsigned_abs() < EXACT_COORD_LIMIT.unsigned_abs()
    };
    assert!(
        below_limit(&point) && vertexes.iter().all(below_limit),
        "coordinate exceeds exact predicate limit"
    );

    let max_x = vertexes.iter().fold(point[0], |acc, v| acc.max(v[0]));
    let extreme = [max_x + 1, point[1]];
    ray_cast(
        &ExactPredicates,
        vertex_count,
        |i| vertexes[i],
        point,
        extreme,
        0..vertex_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn ray_end_is_past_every_vertex() {
        let end = ray_end([0.0, 50_000.0, -3.0], vec2(1.0, 7.0));
        assert!(end.x > 50_000.0);
        assert_eq!(end.y, 7.0);

        let end = ray_end([2.0, 2.0], vec2(2.0, 0.0));
        assert_eq!(end, vec2(3.0, 0.0));
    }

    #[test]
    fn horizontal_edge_on_ray_decides() {
        // notch shape, the top edge of the notch (y = 2) lies on the ray from (1, 2)
        let vertexes = [
            vec2(0.0, 0.0),
            vec2(6.0, 0.0),
            vec2(6.0, 4.0),
            vec2(4.0, 4.0),
            vec2(4.0, 2.0),
            vec2(2.0, 2.0),
            vec2(2.0, 4.0),
            vec2(0.0, 4.0),
        ];
        // collinear edge (4, 2) -> (2, 2) is further along the ray, not on it
        assert!(!point_in_polygon(&vertexes, vec2(1.0, 2.0)));
        // on the notch edge itself
        assert!(point_in_polygon(&vertexes, vec2(3.0, 2.0)));
        // below the notch
        assert!(point_in_polygon(&vertexes, vec2(3.0, 1.0)));
    }

    #[test]
    fn exact_vertex_next_to_limit() {
        let m = EXACT_COORD_LIMIT - 1;
        let square = [[-m, -m], [m, -m], [m, m], [-m, m]];
        assert!(point_in_polygon_exact(&square, [m - 1, 1]));
        assert!(point_in_polygon_exact(&square, [m, 0]));

        let triangle = [[-m, -m], [m, -m], [-m, m]];
        assert!(point_in_polygon_exact(&triangle, [-1, -1]));
        assert!(!point_in_polygon_exact(&triangle, [m - 1, m - 1]));
    }

    #[test]
    #[should_panic(expected = "exact predicate limit")]
    fn exact_vertex_at_max_panics() {
        let vertexes = [[0, 0], [i64::MAX, 0], [0, 10]];
        point_in_polygon_exact(&vertexes, [1, 1]);
    }
}
