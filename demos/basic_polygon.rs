use log::info;
use ray_polygon::{
    core::math::Vector2,
    geometry::{Geometry, GeometryKind, Segment},
    polygon, polygon_keyed,
    polygon::{point_in_polygon, Point, Polygon},
};

fn main() {
    env_logger::init();
    polygon_creation();
    membership();
    geometry_family();
}

fn polygon_creation() {
    // Keys assigned by position
    let square = polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    assert_eq!(
        square.points_keys(),
        &[0, 1, 2, 3],
        "Positional macro should assign keys 0, 1, 2, ..."
    );

    // Explicit keys, any order
    let keyed = polygon_keyed![(42, 0.0, 0.0), (7, 10.0, 0.0), (19, 5.0, 10.0)];
    assert_eq!(
        keyed.points_keys(),
        &[42, 7, 19],
        "Key list should follow vertex order"
    );
    assert_eq!(
        keyed.position_of_key(19),
        Some(2),
        "Key 19 should be the third vertex"
    );

    // From points
    let from_points: Polygon = vec![
        Point::new(1, -1.0, -1.0),
        Point::new(2, 1.0, -1.0),
        Point::new(3, 0.0, 1.0),
    ]
    .into();
    let extents = from_points.extents().unwrap();
    info!(
        "polygon with keys {:?} spans ({}, {}) to ({}, {})",
        from_points.points_keys(),
        extents.min_x,
        extents.min_y,
        extents.max_x,
        extents.max_y
    );
}

fn membership() {
    let square = polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    assert!(
        square.is_inside(Vector2::new(2.0, 2.0)),
        "Center should be inside"
    );
    assert!(
        !square.is_inside(Vector2::new(5.0, 5.0)),
        "Point beyond the corner should be outside"
    );
    assert!(
        square.is_inside(Vector2::new(0.0, 0.0)),
        "Vertex should count as inside"
    );
    assert!(
        square.is_inside(Vector2::new(2.0, 0.0)),
        "Point on an edge should count as inside"
    );

    // Explicit vertex list, only the first n vertexes are used
    let vertexes = square.points();
    assert!(
        !point_in_polygon(&vertexes[..2], Vector2::new(2.0, 0.0)),
        "Fewer than 3 vertexes never enclose a point"
    );

    // Coordinates far from the origin
    let big = polygon![
        (0.0, 0.0),
        (1.0e6, 0.0),
        (1.0e6, 1.0e6),
        (0.0, 1.0e6),
    ];
    assert!(
        big.is_inside(Vector2::new(5.0e5, 5.0e5)),
        "Ray length should adapt to the polygon size"
    );
    info!("membership checks passed");
}

fn geometry_family() {
    let shapes: Vec<Geometry> = vec![
        Point::new(100, 1.0, 1.0).into(),
        Segment::new(Point::new(101, 0.0, 0.0), Point::new(102, 2.0, 2.0)).into(),
        polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)].into(),
    ];

    for shape in &shapes {
        info!(
            "{:?} (code {}) keys {:?} contains (1, 1): {}",
            shape.kind(),
            shape.kind().code(),
            shape.keys(),
            shape.contains_point(Vector2::new(1.0, 1.0))
        );
    }

    assert_eq!(
        shapes[2].kind(),
        GeometryKind::Polygon,
        "Third shape should be a polygon"
    );
}
