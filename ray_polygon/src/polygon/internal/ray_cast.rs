use crate::core::math::Predicates;
use log::trace;

/// Count crossings between a ray segment `point -> extreme` and the polygon edges given by
/// `candidate_edges`, returning true if `point` is inside or on the boundary.
///
/// Edge `i` runs from vertex `i` to vertex `(i + 1) % vertex_count`. `candidate_edges` must be in
/// ascending order and include every edge that could intersect the ray, the first edge the point
/// is collinear with decides the result on its own.
pub(crate) fn ray_cast<K, F, I>(
    predicates: &K,
    vertex_count: usize,
    vertex_at: F,
    point: K::Pos,
    extreme: K::Pos,
    candidate_edges: I,
) -> bool
where
    K: Predicates,
    F: Fn(usize) -> K::Pos,
    I: IntoIterator<Item = usize>,
{
    debug_assert!(vertex_count >= 3, "ray cast requires at least 3 vertexes");
    let mut crossings = 0usize;
    for i in candidate_edges {
        debug_assert!(i < vertex_count, "edge index out of range: {i}");
        let next = (i + 1) % vertex_count;
        let v1 = vertex_at(i);
        let v2 = vertex_at(next);
        if !predicates.segments_intersect(v1, v2, point, extreme) {
            continue;
        }

        if predicates.orientation(v1, point, v2).is_collinear() {
            // point lies on the line through the edge, the edge alone decides
            let on_edge = predicates.on_segment(v1, point, v2);
            trace!("ray cast resolved by collinear edge {i} -> {next}, on edge: {on_edge}");
            return on_edge;
        }

        crossings += 1;
    }

    crossings % 2 == 1
}
