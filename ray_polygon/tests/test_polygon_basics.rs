mod test_utils;

use ray_polygon::{
    core::math::Vector2,
    geometry::{Geometry, GeometryKind, Segment},
    polygon, polygon_keyed,
    polygon::{Point, Polygon},
    static_aabb2d_index::AABB,
};
use test_utils::{
    aabb_fuzzy_eq_eps,
    test_polygons::{comb, square, triangle},
};

#[test]
fn keys_in_vertex_order() {
    let polygon = polygon_keyed![(40, 0.0, 0.0), (7, 4.0, 0.0), (7, 4.0, 4.0), (1, 0.0, 4.0)];
    assert_eq!(polygon.points_keys(), &[40, 7, 7, 1]);
    assert_eq!(polygon.vertex_count(), 4);
    // duplicate keys are kept, lookup finds the first
    assert_eq!(polygon.position_of_key(7), Some(1));
    assert_eq!(polygon.position_of_key(1), Some(3));
    assert_eq!(polygon.position_of_key(2), None);
}

#[test]
fn positional_macro_keys() {
    let square = square();
    assert_eq!(square.points_keys(), &[0, 1, 2, 3]);
    assert_eq!(square[1], Point::new(1, 4.0, 0.0));
    assert_eq!(square.at(3).pos(), Vector2::new(0.0, 4.0));
    assert_eq!(square.get(4), None);
}

#[test]
fn empty_polygon() {
    let empty: Polygon = Polygon::new(Vec::new());
    assert!(empty.is_empty());
    assert_eq!(empty.vertex_count(), 0);
    assert!(empty.points_keys().is_empty());
    assert!(empty.extents().is_none());
    assert_eq!(empty.iter_edges().count(), 0);
    assert!(!empty.is_inside(Vector2::new(0.0, 0.0)));
}

#[test]
fn edges_close_the_polygon() {
    let triangle = triangle();
    let edges: Vec<_> = triangle.iter_edges().collect();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[2].0, triangle[2]);
    assert_eq!(edges[2].1, triangle[0]);
}

#[test]
fn extents() {
    let comb = comb(4);
    let extents = comb.extents().unwrap();
    assert!(aabb_fuzzy_eq_eps(
        &extents,
        &AABB::new(0.0, 0.0, 7.0, 10.0),
        1e-9
    ));

    let single = polygon![(3.0, -2.0)];
    assert!(aabb_fuzzy_eq_eps(
        &single.extents().unwrap(),
        &AABB::new(3.0, -2.0, 3.0, -2.0),
        1e-9
    ));
}

#[test]
fn spatial_index_covers_all_edges() {
    let comb = comb(4);
    let aabb_index = comb.create_aabb_index();
    let extents = comb.extents().unwrap();
    let mut all = aabb_index.query(extents.min_x, extents.min_y, extents.max_x, extents.max_y);
    all.sort_unstable();
    assert_eq!(all, (0..comb.vertex_count()).collect::<Vec<_>>());
}

#[test]
fn conversions() {
    let points = vec![
        Point::new(9, 0.0, 0.0),
        Point::new(8, 1.0, 0.0),
        Point::new(7, 1.0, 1.0),
    ];
    let polygon: Polygon = points.clone().into();
    assert_eq!(polygon.points(), points.as_slice());
    let back: Vec<Point> = polygon.clone().into();
    assert_eq!(back, points);
    assert_eq!(polygon.into_points(), points);
}

#[test]
fn geometry_dispatch() {
    let shapes: Vec<Geometry> = vec![
        Point::new(100, 2.0, 2.0).into(),
        Segment::new(Point::new(101, 0.0, 0.0), Point::new(102, 4.0, 4.0)).into(),
        square().into(),
    ];
    let kinds: Vec<u8> = shapes.iter().map(|g| g.kind().code()).collect();
    assert_eq!(kinds, vec![1, 2, 3]);
    assert_eq!(GeometryKind::from_code(2), Some(GeometryKind::Segment));

    assert_eq!(shapes[0].keys(), vec![100]);
    assert_eq!(shapes[1].keys(), vec![101, 102]);
    assert_eq!(shapes[2].keys(), vec![0, 1, 2, 3]);

    let center = Vector2::new(2.0, 2.0);
    assert!(shapes.iter().all(|g| g.contains_point(center)));
    let corner = Vector2::new(4.0, 0.0);
    assert!(!shapes[0].contains_point(corner));
    assert!(!shapes[1].contains_point(corner));
    assert!(shapes[2].contains_point(corner));

    let seg_extents = shapes[1].extents().unwrap();
    assert!(aabb_fuzzy_eq_eps(
        &seg_extents,
        &AABB::new(0.0, 0.0, 4.0, 4.0),
        1e-9
    ));
}

#[cfg(feature = "serde")]
mod serialization {
    use super::*;

    #[test]
    fn polygon_serializes_as_point_list() {
        let polygon = polygon_keyed![(3, 0.0, 0.0), (5, 4.0, 0.0), (8, 2.0, 3.0)];
        let json = serde_json::to_string(&polygon).unwrap();
        assert_eq!(
            json,
            r#"[{"key":3,"x":0.0,"y":0.0},{"key":5,"x":4.0,"y":0.0},{"key":8,"x":2.0,"y":3.0}]"#
        );
        let parsed: Polygon = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, polygon);
        assert_eq!(parsed.points_keys(), &[3, 5, 8]);
    }

    #[test]
    fn geometry_is_tagged() {
        let g: Geometry = Point::new(1, 0.5, 1.5).into();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"kind":"Point","data":{"key":1,"x":0.5,"y":1.5}}"#);
        let parsed: Geometry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, g);

        let g: Geometry = square().into();
        let parsed: Geometry = serde_json::from_str(&serde_json::to_string(&g).unwrap()).unwrap();
        assert_eq!(parsed.kind(), GeometryKind::Polygon);
        assert_eq!(parsed.keys(), vec![0, 1, 2, 3]);
    }
}
