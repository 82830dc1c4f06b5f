mod test_utils;

use ray_polygon::{
    core::math::Vector2,
    polygon,
    polygon::{
        point_in_polygon, point_in_polygon_eps, point_in_polygon_exact, point_in_polygon_opt, Point,
        PointInsideOptions,
        Polygon,
    },
};
use test_utils::test_polygons::{comb, notched_rectangle, square, square_clockwise, triangle};

fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

/// Assert `is_inside` with and without a spatial index.
macro_rules! assert_inside {
    ($polygon:expr, $point:expr, $expected:expr) => {{
        let polygon = &$polygon;
        let point = $point;
        assert_eq!(polygon.is_inside(point), $expected, "plain {point:?}");
        let aabb_index = polygon.create_aabb_index();
        let options = PointInsideOptions {
            aabb_index: Some(&aabb_index),
            ..Default::default()
        };
        assert_eq!(polygon.is_inside_opt(point, &options), $expected, "indexed {point:?}");
    }};
}

#[test]
fn square_interior_and_exterior() {
    let square = square();
    assert_inside!(square, v(2.0, 2.0), true);
    assert_inside!(square, v(0.5, 3.5), true);
    assert_inside!(square, v(5.0, 5.0), false);
    assert_inside!(square, v(-1.0, 2.0), false);
    assert_inside!(square, v(2.0, 4.5), false);
    assert_inside!(square, v(2.0, -0.5), false);
}

#[test]
fn square_boundary_is_inside() {
    let square = square();
    // vertexes
    assert_inside!(square, v(0.0, 0.0), true);
    assert_inside!(square, v(4.0, 0.0), true);
    assert_inside!(square, v(4.0, 4.0), true);
    assert_inside!(square, v(0.0, 4.0), true);
    // edges
    assert_inside!(square, v(2.0, 0.0), true);
    assert_inside!(square, v(4.0, 2.0), true);
    assert_inside!(square, v(2.0, 4.0), true);
    assert_inside!(square, v(0.0, 2.0), true);
}

#[test]
fn traversal_direction_does_not_matter() {
    let ccw = square();
    let cw = square_clockwise();
    let points = [
        v(2.0, 2.0),
        v(5.0, 5.0),
        v(0.0, 0.0),
        v(2.0, 0.0),
        v(4.0, 3.0),
        v(-0.5, 1.0),
    ];
    for p in points {
        assert_eq!(ccw.is_inside(p), cw.is_inside(p), "{p:?}");
    }
}

#[test]
fn triangle_cases() {
    let triangle = triangle();
    assert_inside!(triangle, v(5.0, 3.0), true);
    assert_inside!(triangle, v(20.0, 0.0), false);
    assert_inside!(triangle, v(-5.0, 0.0), false);
    assert_inside!(triangle, v(1.0, 8.0), false);
    assert_inside!(triangle, v(5.0, 10.0), true);
    // ray passes through the apex vertex, touching both edges meeting there
    assert_inside!(triangle, v(2.0, 10.0), false);
}

#[test]
fn fewer_than_three_vertexes_is_never_inside() {
    let empty: Polygon = Polygon::new(Vec::new());
    assert!(!empty.is_inside(v(0.0, 0.0)));

    let single = polygon![(1.0, 1.0)];
    assert!(!single.is_inside(v(1.0, 1.0)));

    let double = polygon![(0.0, 0.0), (4.0, 0.0)];
    assert!(!double.is_inside(v(2.0, 0.0)));
    assert!(!double.is_inside(v(0.0, 0.0)));

    let square = square();
    assert!(!point_in_polygon(&square.points()[..2], v(2.0, 0.0)));
    assert!(!point_in_polygon(&square.points()[..0], v(2.0, 2.0)));
    assert!(point_in_polygon(&square.points()[..3], v(3.0, 1.0)));
    // first 3 vertexes only form a triangle, (1, 3) is outside it
    assert!(!point_in_polygon(&square.points()[..3], v(1.0, 3.0)));
}

#[test]
fn large_coordinates() {
    let big = polygon![
        (0.0, 0.0),
        (100_000.0, 0.0),
        (100_000.0, 100_000.0),
        (0.0, 100_000.0),
    ];
    assert_inside!(big, v(50_000.0, 50_000.0), true);
    assert_inside!(big, v(99_999.0, 1.0), true);
    assert_inside!(big, v(150_000.0, 50_000.0), false);
    assert_inside!(big, v(100_000.0, 50_000.0), true);

    let shifted = polygon![
        (-2.0e6, -2.0e6),
        (-1.0e6, -2.0e6),
        (-1.0e6, -1.0e6),
        (-2.0e6, -1.0e6),
    ];
    assert_inside!(shifted, v(-1.5e6, -1.5e6), true);
    assert_inside!(shifted, v(-0.5e6, -1.5e6), false);
}

#[test]
fn collinear_edge_ahead_on_ray() {
    let notched = notched_rectangle();
    // the notch bottom edge lies on the ray but not under the point, that edge decides
    assert_inside!(notched, v(1.0, 2.0), false);
    // points on the notch edges
    assert_inside!(notched, v(3.0, 2.0), true);
    assert_inside!(notched, v(4.0, 3.0), true);
    // inside the notch
    assert_inside!(notched, v(3.0, 3.0), false);
    // below and beside the notch
    assert_inside!(notched, v(3.0, 1.0), true);
    assert_inside!(notched, v(5.0, 2.0), true);
    assert_inside!(notched, v(1.0, 3.0), true);
}

#[test]
fn comb_teeth_and_gaps() {
    let teeth = 8;
    let comb = comb(teeth);
    assert_eq!(comb.vertex_count(), 4 * teeth);
    for t in 0..teeth {
        let x = (2 * t) as f64;
        assert_inside!(comb, v(x + 0.5, 5.0), true);
        assert_inside!(comb, v(x + 0.5, 0.5), true);
        if t + 1 < teeth {
            assert_inside!(comb, v(x + 1.5, 5.0), false);
            assert_inside!(comb, v(x + 1.5, 0.5), true);
        }
    }
    assert_inside!(comb, v(-0.5, 5.0), false);
    assert_inside!(comb, v(0.5, 10.5), false);
}

#[test]
fn spatial_index_matches_full_walk() {
    let comb = comb(25);
    let aabb_index = comb.create_aabb_index();
    let indexed = PointInsideOptions {
        aabb_index: Some(&aabb_index),
        ..Default::default()
    };
    let mut inside_count = 0;
    for i in -2..=102 {
        for j in -2..=24 {
            let p = v(i as f64 * 0.5, j as f64 * 0.5);
            let plain = comb.is_inside(p);
            assert_eq!(comb.is_inside_opt(p, &indexed), plain, "{p:?}");
            if plain {
                inside_count += 1;
            }
        }
    }
    assert!(inside_count > 0);
}

#[test]
fn exact_matches_float_on_lattice() {
    let comb = comb(6);
    let exact_vertexes: Vec<[i64; 2]> = comb
        .points()
        .iter()
        .map(|p| [p.x() as i64, p.y() as i64])
        .collect();
    for x in -1..=12 {
        for y in -1..=11 {
            assert_eq!(
                point_in_polygon_exact(&exact_vertexes, [x, y]),
                comb.is_inside(v(x as f64, y as f64)),
                "({x}, {y})"
            );
        }
    }
}

#[test]
fn exact_large_coordinates() {
    let big = 1i64 << 40;
    let square = [[-big, -big], [big, -big], [big, big], [-big, big]];
    assert!(point_in_polygon_exact(&square, [0, 0]));
    assert!(point_in_polygon_exact(&square, [big, 0]));
    assert!(point_in_polygon_exact(&square, [big - 1, big - 1]));
    assert!(!point_in_polygon_exact(&square, [big + 1, 0]));
    assert!(!point_in_polygon_exact(&square[..2], [0, -big]));
}

#[test]
fn query_point_key_is_ignored() {
    let square = square();
    assert!(square.is_inside(Point::new(42, 2.0, 2.0)));
    assert!(!square.is_inside(Point::new(0, 5.0, 5.0)));
}

#[test]
fn truncation_tolerance_keeps_boundary_closed() {
    let square = square();
    let aabb_index = square.create_aabb_index();
    let options = PointInsideOptions {
        aabb_index: Some(&aabb_index),
        collinear_eps: 1.0,
    };
    let cases = [
        // collinear with the bottom edge but beyond its ends
        (v(-0.9, 0.0), false),
        (v(4.9, 0.0), false),
        (v(-0.9, 4.0), false),
        // on the boundary
        (v(0.0, 0.0), true),
        (v(2.0, 0.0), true),
        (v(4.0, 2.0), true),
        (v(2.0, 2.0), true),
    ];
    for (p, expected) in cases {
        assert_eq!(point_in_polygon_eps(square.points(), p, 1.0), expected, "{p:?}");
        assert_eq!(square.is_inside_opt(p, &options), expected, "indexed {p:?}");
    }
}

#[test]
fn mismatched_spatial_index_does_not_panic() {
    let square = square();
    // index holds 4 edges, the queried slice only 3
    let aabb_index = square.create_aabb_index();
    let options = PointInsideOptions {
        aabb_index: Some(&aabb_index),
        ..Default::default()
    };
    for p in [v(-1.0, 2.0), v(3.0, 1.0), v(2.0, 4.0)] {
        let _ = point_in_polygon_opt(&square.points()[..3], p, &options);
    }
}

#[test]
fn works_with_f32() {
    let square: Polygon<f32> = Polygon::new(vec![
        Point::new(0, 0.0f32, 0.0),
        Point::new(1, 4.0, 0.0),
        Point::new(2, 4.0, 4.0),
        Point::new(3, 0.0, 4.0),
    ]);
    assert!(square.is_inside(Vector2::new(2.0f32, 2.0)));
    assert!(square.is_inside(Vector2::new(4.0f32, 1.0)));
    assert!(!square.is_inside(Vector2::new(5.0f32, 5.0)));
}
