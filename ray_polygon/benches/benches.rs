use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use ray_polygon::{
    core::math::{vec2, Vector2},
    polygon::{PointInsideOptions, Polygon},
};
use test_polygons::*;

/// Grid of query points covering the polygon extents.
fn query_points(polygon: &Polygon, per_side: usize) -> Vec<Vector2> {
    let extents = polygon.extents().unwrap();
    let dx = (extents.max_x - extents.min_x) / per_side as f64;
    let dy = (extents.max_y - extents.min_y) / per_side as f64;
    let mut result = Vec::with_capacity(per_side * per_side);
    for i in 0..per_side {
        for j in 0..per_side {
            result.push(vec2(
                extents.min_x + (i as f64 + 0.25) * dx,
                extents.min_y + (j as f64 + 0.25) * dy,
            ));
        }
    }

    result
}

fn bench_is_inside(b: &mut Bencher, polygon: &Polygon, points: &[Vector2]) {
    b.iter(|| points.iter().filter(|&&p| polygon.is_inside(p)).count())
}

fn bench_is_inside_indexed(b: &mut Bencher, polygon: &Polygon, points: &[Vector2]) {
    let aabb_index = polygon.create_aabb_index();
    let options = PointInsideOptions {
        aabb_index: Some(&aabb_index),
        ..Default::default()
    };
    b.iter(|| {
        points
            .iter()
            .filter(|&&p| polygon.is_inside_opt(p, &options))
            .count()
    })
}

fn is_inside_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_inside");
    let vertex_counts = &[24, 240, 2400, 24000];
    for &i in vertex_counts {
        let star = star(i);
        let star_points = query_points(&star, 10);
        group.bench_with_input(BenchmarkId::new("star", i), &i, |b, _| {
            bench_is_inside(b, &star, &star_points)
        });
        group.bench_with_input(BenchmarkId::new("star_indexed", i), &i, |b, _| {
            bench_is_inside_indexed(b, &star, &star_points)
        });

        let comb = comb(i / 4);
        let comb_points = query_points(&comb, 10);
        group.bench_with_input(BenchmarkId::new("comb", i), &i, |b, _| {
            bench_is_inside(b, &comb, &comb_points)
        });
        group.bench_with_input(BenchmarkId::new("comb_indexed", i), &i, |b, _| {
            bench_is_inside_indexed(b, &comb, &comb_points)
        });
    }

    group.finish();
}

fn create_aabb_index_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_aabb_index");
    let vertex_counts = &[24, 240, 2400, 24000];
    for &i in vertex_counts {
        let star = star(i);
        group.bench_with_input(BenchmarkId::new("star", i), &i, |b, _| {
            b.iter(|| star.create_aabb_index())
        });
    }

    group.finish();
}

criterion_group!(is_inside, is_inside_group, create_aabb_index_group);
criterion_main!(is_inside);
