use log::info;
use ray_polygon::core::math::{
    on_segment, orientation, orientation_eps, orientation_exact, orientation_value,
    segments_intersect, segments_intersect_exact, vec2, Orientation,
};

fn main() {
    env_logger::init();
    orientations();
    intersections();
    exact_integers();
}

fn orientations() {
    let p = vec2(0.0, 0.0);
    let q = vec2(4.0, 0.0);
    assert_eq!(
        orientation(p, q, vec2(4.0, 4.0)),
        Orientation::CounterClockwise,
        "Left turn should be counter clockwise"
    );
    assert_eq!(
        orientation(p, q, vec2(4.0, -4.0)),
        Orientation::Clockwise,
        "Right turn should be clockwise"
    );
    assert_eq!(
        orientation(p, q, vec2(8.0, 0.0)),
        Orientation::Collinear,
        "Points on one line should be collinear"
    );

    // Tolerance is explicit, 1.0 behaves like truncating the value to an integer
    let r = vec2(200.0, 0.001);
    let far = vec2(100.0, 0.0);
    info!(
        "orientation value {} is {:?} with default tolerance and {:?} with tolerance 1",
        orientation_value(p, far, r),
        orientation(p, far, r),
        orientation_eps(p, far, r, 1.0)
    );

    assert!(
        on_segment(p, vec2(2.0, 0.0), q),
        "Midpoint should lie within the segment bounds"
    );
}

fn intersections() {
    assert!(
        segments_intersect(vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(5.0, 0.0), vec2(15.0, 0.0)),
        "Overlapping collinear segments should intersect"
    );
    assert!(
        segments_intersect(vec2(0.0, 0.0), vec2(4.0, 4.0), vec2(0.0, 4.0), vec2(4.0, 0.0)),
        "Crossing diagonals should intersect"
    );
    assert!(
        !segments_intersect(vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(0.0, 1.0), vec2(10.0, 1.0)),
        "Parallel segments should not intersect"
    );
    info!("intersection checks passed");
}

fn exact_integers() {
    // orientation value is -1, a tolerance of 1 hides it
    let p = [0, 0];
    let q = [3_000_000_000_000, 1];
    let r = [5_999_999_999_999, 2];
    info!(
        "exact orientation {:?}, float orientation with tolerance 1 {:?}",
        orientation_exact(p, q, r),
        orientation_eps(
            vec2(p[0] as f64, p[1] as f64),
            vec2(q[0] as f64, q[1] as f64),
            vec2(r[0] as f64, r[1] as f64),
            1.0
        )
    );
    assert!(
        segments_intersect_exact([0, 0], [10, 10], [0, 10], [10, 0]),
        "Exact predicates should find the crossing"
    );
}
