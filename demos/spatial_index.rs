use log::{info, warn};
use ray_polygon::{
    core::math::vec2,
    polygon::{Point, PointInsideOptions, Polygon},
};
use std::f64::consts::TAU;

/// Star polygon alternating between two radii.
fn star(vertex_count: usize) -> Polygon {
    (0..vertex_count)
        .map(|i| {
            let angle = i as f64 * TAU / vertex_count as f64;
            let radius = if i % 2 == 0 { 40.0 } else { 25.0 };
            Point::new(i as u64, radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

fn main() {
    env_logger::init();

    let polygon = star(10_000);
    let aabb_index = polygon.create_aabb_index();
    let options = PointInsideOptions {
        aabb_index: Some(&aabb_index),
        ..Default::default()
    };

    let mut inside = 0;
    let mut total = 0;
    let mut disagree = 0;
    for i in -50..=50 {
        for j in -50..=50 {
            let p = vec2(i as f64, j as f64);
            let indexed = polygon.is_inside_opt(p, &options);
            if indexed != polygon.is_inside(p) {
                warn!("indexed and full walk disagree at ({i}, {j})");
                disagree += 1;
            }
            total += 1;
            if indexed {
                inside += 1;
            }
        }
    }

    info!(
        "{inside} of {total} grid points inside a {} vertex star ({disagree} disagreements)",
        polygon.vertex_count()
    );
}
