use ray_polygon::{
    polygon,
    polygon::{Point, Polygon},
};

/// Axis aligned square (0, 0) to (4, 4), counter clockwise.
pub fn square() -> Polygon {
    polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]
}

/// Triangle (0, 0), (10, 0), (5, 10), counter clockwise.
pub fn triangle() -> Polygon {
    polygon![(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)]
}

/// 6 x 4 rectangle with a 2 x 2 notch cut down from the middle of the top edge.
pub fn notched_rectangle() -> Polygon {
    polygon![
        (0.0, 0.0),
        (6.0, 0.0),
        (6.0, 4.0),
        (4.0, 4.0),
        (4.0, 2.0),
        (2.0, 2.0),
        (2.0, 4.0),
        (0.0, 4.0),
    ]
}

/// Same as [square] traversed clockwise.
pub fn square_clockwise() -> Polygon {
    polygon![(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)]
}

/// Integer lattice "comb": a base strip along the bottom with `teeth` upward teeth, each tooth 1
/// wide, 10 tall, and separated by gaps 1 wide.
pub fn comb(teeth: usize) -> Polygon {
    let mut points = Vec::with_capacity(4 * teeth + 2);
    let width = (2 * teeth - 1) as f64;
    points.push(Point::new(0, 0.0, 0.0));
    points.push(Point::new(1, width, 0.0));
    for t in (0..teeth).rev() {
        let x0 = (2 * t) as f64;
        let x1 = x0 + 1.0;
        let key = points.len() as u64;
        points.push(Point::new(key, x1, 10.0));
        points.push(Point::new(key + 1, x0, 10.0));
        if t > 0 {
            points.push(Point::new(key + 2, x0, 1.0));
            points.push(Point::new(key + 3, x0 - 1.0, 1.0));
        }
    }

    Polygon::new(points)
}
