//! This module contains the C foreign function interface for ray_polygon.
//!
//! Every function returns an `i32` status code: 0 on success, -1 if a panic was caught and a
//! function specific positive code otherwise (1 is always a null required argument). When a
//! non-zero code is returned a message is stored for the calling thread, retrieve it with
//! [rpg_last_error_msg].
#![allow(non_camel_case_types)]
use ray_polygon::{
    core::math::{on_segment_eps, orientation_eps, segments_intersect_eps, Orientation, Vector2},
    polygon::{point_in_polygon_opt, Point, PointInsideOptions, Polygon},
    static_aabb2d_index::StaticAABB2DIndex,
};
use core::slice;
use std::{convert::TryFrom, ffi::c_char, panic};

pub mod error_handling;
use error_handling::{caught_panic, clear_last_error, null_argument, set_last_error, LAST_ERROR};

/// Helper macro to catch unwind and return -1 if panic was caught otherwise returns whatever the
/// expression returned. The panic message is stored as the last error under the function name
/// given.
macro_rules! ffi_catch_unwind {
    ($name: expr, $body: expr) => {
        match panic::catch_unwind(move || $body) {
            Ok(r) => r,
            Err(e) => caught_panic($name, e),
        }
    };
}

/// Opaque type that wraps a [StaticAABB2DIndex] of polygon edges.
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct rpg_aabbindex(pub StaticAABB2DIndex<f64>);

/// Represents a simple 2D point with x and y coordinate values.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct rpg_point {
    pub x: f64,
    pub y: f64,
}

impl rpg_point {
    pub fn new(x: f64, y: f64) -> Self {
        rpg_point { x, y }
    }

    pub fn to_internal(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// Represents a polygon vertex holding key, x, and y.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct rpg_vertex {
    pub key: u64,
    pub x: f64,
    pub y: f64,
}

impl rpg_vertex {
    pub fn new(key: u64, x: f64, y: f64) -> Self {
        rpg_vertex { key, x, y }
    }

    pub fn from_internal(p: Point<f64>) -> Self {
        rpg_vertex::new(p.key(), p.x(), p.y())
    }

    pub fn to_internal(self) -> Point<f64> {
        Point::new(self.key, self.x, self.y)
    }
}

/// Opaque type that wraps a [Polygon].
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct rpg_polygon(pub Polygon<f64>);

/// FFI representation of [PointInsideOptions].
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct rpg_point_inside_o {
    pub aabb_index: *const rpg_aabbindex,
    pub collinear_eps: f64,
}

impl rpg_point_inside_o {
    /// Convert FFI point inside options type to internal type.
    ///
    /// # Safety
    ///
    /// `aabb_index` field must be null or a valid pointer to a [rpg_aabbindex].
    pub unsafe fn to_internal(&self) -> PointInsideOptions<'_, f64> {
        PointInsideOptions {
            aabb_index: self.aabb_index.as_ref().map(|w| &w.0),
            collinear_eps: self.collinear_eps,
        }
    }
}

impl Default for rpg_point_inside_o {
    fn default() -> Self {
        let d = PointInsideOptions::<f64>::default();
        Self {
            aabb_index: std::ptr::null(),
            collinear_eps: d.collinear_eps,
        }
    }
}

/// Write default option values to a [rpg_point_inside_o].
///
/// ## Specific Error Codes
/// * 1 = `options` is null.
///
/// # Safety
///
/// `options` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_point_inside_o_init(options: *mut rpg_point_inside_o) -> i32 {
    const NAME: &str = "rpg_point_inside_o_init";
    ffi_catch_unwind!(NAME, {
        if options.is_null() {
            return null_argument(NAME, "options");
        }

        options.write(Default::default());
        0
    })
}

fn orientation_to_u8(orientation: Orientation) -> u8 {
    match orientation {
        Orientation::Collinear => 0,
        Orientation::Clockwise => 1,
        Orientation::CounterClockwise => 2,
    }
}

fn count_to_u32(function_name: &str, count: usize) -> Result<u32, i32> {
    u32::try_from(count).map_err(|_| {
        set_last_error(format!("count {count} exceeds u32::MAX"), function_name);
        2
    })
}

/// Get the message of the last error that occurred on the calling thread.
///
/// `msg` is an out parameter to hold a pointer to a null terminated string. The string is owned by
/// the library and stays valid until the next error is set or cleared on the same thread.
///
/// ## Specific Error Codes
/// * 1 = `msg` is null.
/// * 2 = no error has been set.
///
/// # Safety
///
/// `msg` must be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_last_error_msg(msg: *mut *const c_char) -> i32 {
    if msg.is_null() {
        return 1;
    }

    let ptr = LAST_ERROR.with(|last_error| {
        last_error
            .borrow()
            .as_ref()
            .map(|data| data.error_msg.as_ptr())
    });

    match ptr {
        Some(p) => {
            msg.write(p);
            0
        }
        None => 2,
    }
}

/// Get the name of the function that set the last error on the calling thread.
///
/// Same lifetime rules and error codes as [rpg_last_error_msg].
///
/// # Safety
///
/// `function_name` must be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_last_error_function(function_name: *mut *const c_char) -> i32 {
    if function_name.is_null() {
        return 1;
    }

    let ptr = LAST_ERROR.with(|last_error| {
        last_error
            .borrow()
            .as_ref()
            .map(|data| data.function_name.as_ptr())
    });

    match ptr {
        Some(p) => {
            function_name.write(p);
            0
        }
        None => 2,
    }
}

/// Clear the last error of the calling thread.
#[no_mangle]
pub extern "C" fn rpg_last_error_clear() {
    clear_last_error();
}

/// Create a new polygon object.
///
/// `vertexes` is an array of [rpg_vertex] in traversal order to create the polygon with (may be
/// null if `n_vertexes` is 0).
/// `n_vertexes` contains the number of vertexes in the array.
/// `polygon` is an out parameter to hold the created polygon.
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null, or `vertexes` is null while `n_vertexes` is not 0.
///
/// # Safety
///
/// `vertexes` may be null if `n_vertexes` is 0 or must point to a valid contiguous buffer of
/// [rpg_vertex] with length of at least `n_vertexes`.
/// `polygon` must be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_polygon_create(
    vertexes: *const rpg_vertex,
    n_vertexes: u32,
    polygon: *mut *const rpg_polygon,
) -> i32 {
    const NAME: &str = "rpg_polygon_create";
    ffi_catch_unwind!(NAME, {
        if polygon.is_null() {
            return null_argument(NAME, "polygon");
        }

        if vertexes.is_null() && n_vertexes != 0 {
            return null_argument(NAME, "vertexes");
        }

        let points = if n_vertexes == 0 {
            Vec::new()
        } else {
            let data = slice::from_raw_parts(vertexes, n_vertexes as usize);
            data.iter().map(|v| v.to_internal()).collect()
        };

        polygon.write(Box::into_raw(Box::new(rpg_polygon(Polygon::new(points)))));
        0
    })
}

/// Free an existing [rpg_polygon] object.
///
/// Nothing happens if `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid rpg_polygon object that was created with
/// [rpg_polygon_create] and has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn rpg_polygon_f(polygon: *mut rpg_polygon) {
    if !polygon.is_null() {
        drop(Box::from_raw(polygon))
    }
}

/// Clones the polygon.
///
/// `polygon` is the polygon to be cloned.
/// `cloned` is used as an out parameter to hold the new polygon from cloning.
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid rpg_polygon object that was created with
/// [rpg_polygon_create] and has not been freed.
/// `cloned` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_polygon_clone(
    polygon: *const rpg_polygon,
    cloned: *mut *const rpg_polygon,
) -> i32 {
    const NAME: &str = "rpg_polygon_clone";
    ffi_catch_unwind!(NAME, {
        if polygon.is_null() {
            return null_argument(NAME, "polygon");
        }

        cloned.write(Box::into_raw(Box::new(rpg_polygon((*polygon).0.clone()))));
        0
    })
}

/// Get the vertex count of a polygon.
///
/// `count` used as out parameter to hold the vertex count.
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
/// * 2 = vertex count does not fit in a `u32`.
///
/// # Safety
///
/// `polygon` must be null or a valid rpg_polygon object that was created with
/// [rpg_polygon_create] and has not been freed.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_polygon_get_vertex_count(
    polygon: *const rpg_polygon,
    count: *mut u32,
) -> i32 {
    const NAME: &str = "rpg_polygon_get_vertex_count";
    ffi_catch_unwind!(NAME, {
        if polygon.is_null() {
            return null_argument(NAME, "polygon");
        }

        match count_to_u32(NAME, (*polygon).0.vertex_count()) {
            Ok(c) => {
                count.write(c);
                0
            }
            Err(code) => code,
        }
    })
}

/// Fills the buffer given with the vertex data of a polygon.
///
/// You must use [rpg_polygon_get_vertex_count] to ensure the buffer given has adequate length
/// to be filled with all vertexes!
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid rpg_polygon object that was created with
/// [rpg_polygon_create] and has not been freed.
/// `vertex_data` must point to a buffer that is large enough to hold all the vertexes or a buffer
/// overrun will happen.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_polygon_get_vertex_data(
    polygon: *const rpg_polygon,
    vertex_data: *mut rpg_vertex,
) -> i32 {
    const NAME: &str = "rpg_polygon_get_vertex_data";
    ffi_catch_unwind!(NAME, {
        if polygon.is_null() {
            return null_argument(NAME, "polygon");
        }

        let points = (*polygon).0.points();
        if points.is_empty() {
            return 0;
        }

        let buffer = slice::from_raw_parts_mut(vertex_data, points.len());
        for (b, &p) in buffer.iter_mut().zip(points) {
            *b = rpg_vertex::from_internal(p);
        }
        0
    })
}

/// Fills the buffer given with the vertex keys of a polygon (in vertex order).
///
/// You must use [rpg_polygon_get_vertex_count] to ensure the buffer given has adequate length
/// to be filled with all keys!
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid rpg_polygon object that was created with
/// [rpg_polygon_create] and has not been freed.
/// `keys` must point to a buffer that is large enough to hold all the keys or a buffer overrun
/// will happen.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_polygon_get_keys(polygon: *const rpg_polygon, keys: *mut u64) -> i32 {
    const NAME: &str = "rpg_polygon_get_keys";
    ffi_catch_unwind!(NAME, {
        if polygon.is_null() {
            return null_argument(NAME, "polygon");
        }

        let source = (*polygon).0.points_keys();
        if source.is_empty() {
            return 0;
        }

        slice::from_raw_parts_mut(keys, source.len()).copy_from_slice(source);
        0
    })
}

/// Get a vertex from a polygon.
///
/// `position` is the index of the vertex.
/// `vertex` is used as an out parameter to hold the vertex retrieved.
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
/// * 2 = `position` is out of bounds.
///
/// # Safety
///
/// `polygon` must be null or a valid rpg_polygon object that was created with
/// [rpg_polygon_create] and has not been freed.
/// `vertex` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_polygon_get_vertex(
    polygon: *const rpg_polygon,
    position: u32,
    vertex: *mut rpg_vertex,
) -> i32 {
    const NAME: &str = "rpg_polygon_get_vertex";
    ffi_catch_unwind!(NAME, {
        if polygon.is_null() {
            return null_argument(NAME, "polygon");
        }

        match (*polygon).0.get(position as usize) {
            Some(p) => {
                vertex.write(rpg_vertex::from_internal(p));
                0
            }
            None => {
                set_last_error(format!("position {position} is out of bounds"), NAME);
                2
            }
        }
    })
}

/// Wraps [Polygon::position_of_key].
///
/// `position` is used as an out parameter to hold the index of the first vertex with `key`.
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
/// * 2 = no vertex has the key given.
///
/// # Safety
///
/// `polygon` must be null or a valid rpg_polygon object that was created with
/// [rpg_polygon_create] and has not been freed.
/// `position` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_polygon_position_of_key(
    polygon: *const rpg_polygon,
    key: u64,
    position: *mut u32,
) -> i32 {
    const NAME: &str = "rpg_polygon_position_of_key";
    ffi_catch_unwind!(NAME, {
        if polygon.is_null() {
            return null_argument(NAME, "polygon");
        }

        match (*polygon).0.position_of_key(key) {
            // position is below vertex count, which the caller can already read as a u32
            Some(i) => match count_to_u32(NAME, i) {
                Ok(i) => {
                    position.write(i);
                    0
                }
                Err(code) => code,
            },
            None => {
                set_last_error(format!("no vertex with key {key}"), NAME);
                2
            }
        }
    })
}

/// Wraps [Polygon::extents].
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
/// * 2 = `polygon` has no vertexes.
///
/// # Safety
///
/// `polygon` must be null or a valid rpg_polygon object that was created with
/// [rpg_polygon_create] and has not been freed.
/// `min_x`, `min_y`, `max_x`, and `max_y` must all point to a valid places in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_polygon_eval_extents(
    polygon: *const rpg_polygon,
    min_x: *mut f64,
    min_y: *mut f64,
    max_x: *mut f64,
    max_y: *mut f64,
) -> i32 {
    const NAME: &str = "rpg_polygon_eval_extents";
    ffi_catch_unwind!(NAME, {
        if polygon.is_null() {
            return null_argument(NAME, "polygon");
        }

        match (*polygon).0.extents() {
            Some(aabb) => {
                min_x.write(aabb.min_x);
                min_y.write(aabb.min_y);
                max_x.write(aabb.max_x);
                max_y.write(aabb.max_y);
                0
            }
            None => {
                set_last_error("polygon has no vertexes", NAME);
                2
            }
        }
    })
}

/// Wraps [Polygon::is_inside_opt].
///
/// `options` is allowed to be null (default options will be used).
/// `is_inside` is used as an out parameter, written non-zero if `point` is inside or on the
/// boundary of `polygon` and zero otherwise.
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid rpg_polygon object that was created with
/// [rpg_polygon_create] and has not been freed.
/// `options` must be null or point to a valid [rpg_point_inside_o] whose `aabb_index` was created
/// from `polygon`.
/// `is_inside` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_polygon_is_inside(
    polygon: *const rpg_polygon,
    point: rpg_point,
    options: *const rpg_point_inside_o,
    is_inside: *mut u8,
) -> i32 {
    const NAME: &str = "rpg_polygon_is_inside";
    ffi_catch_unwind!(NAME, {
        if polygon.is_null() {
            return null_argument(NAME, "polygon");
        }

        let result = match options.as_ref() {
            Some(o) => (*polygon).0.is_inside_opt(point.to_internal(), &o.to_internal()),
            None => (*polygon).0.is_inside(point.to_internal()),
        };
        is_inside.write(result as u8);
        0
    })
}

/// Test a point against an explicit vertex list, wraps
/// [point_in_polygon_opt](ray_polygon::polygon::point_in_polygon_opt).
///
/// `vertexes` is an array of [rpg_point] in traversal order (may be null if `n_vertexes` is 0),
/// only the first `n_vertexes` are used.
/// `options` is allowed to be null (default options will be used).
/// `is_inside` is used as an out parameter, written non-zero if `point` is inside or on the
/// boundary and zero otherwise.
///
/// ## Specific Error Codes
/// * 1 = `vertexes` is null while `n_vertexes` is not 0.
///
/// # Safety
///
/// `vertexes` may be null if `n_vertexes` is 0 or must point to a valid contiguous buffer of
/// [rpg_point] with length of at least `n_vertexes`.
/// `options` must be null or point to a valid [rpg_point_inside_o] whose `aabb_index` was built
/// from the same vertexes.
/// `is_inside` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_point_in_polygon(
    vertexes: *const rpg_point,
    n_vertexes: u32,
    point: rpg_point,
    options: *const rpg_point_inside_o,
    is_inside: *mut u8,
) -> i32 {
    const NAME: &str = "rpg_point_in_polygon";
    ffi_catch_unwind!(NAME, {
        if vertexes.is_null() && n_vertexes != 0 {
            return null_argument(NAME, "vertexes");
        }

        let positions: Vec<Vector2<f64>> = if n_vertexes == 0 {
            Vec::new()
        } else {
            slice::from_raw_parts(vertexes, n_vertexes as usize)
                .iter()
                .map(|p| p.to_internal())
                .collect()
        };

        let options = match options.as_ref() {
            Some(o) => o.to_internal(),
            None => PointInsideOptions::new(),
        };
        let result = point_in_polygon_opt(&positions, point.to_internal(), &options);
        is_inside.write(result as u8);
        0
    })
}

/// Wraps [Polygon::create_aabb_index].
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid rpg_polygon object that was created with
/// [rpg_polygon_create] and has not been freed.
/// `aabbindex` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_polygon_create_aabbindex(
    polygon: *const rpg_polygon,
    aabbindex: *mut *const rpg_aabbindex,
) -> i32 {
    const NAME: &str = "rpg_polygon_create_aabbindex";
    ffi_catch_unwind!(NAME, {
        if polygon.is_null() {
            return null_argument(NAME, "polygon");
        }

        let result = (*polygon).0.create_aabb_index();
        aabbindex.write(Box::into_raw(Box::new(rpg_aabbindex(result))));
        0
    })
}

/// Free an existing [rpg_aabbindex] object.
///
/// Nothing happens if `aabbindex` is null.
///
/// # Safety
///
/// `aabbindex` must be null or a valid [rpg_aabbindex] object.
#[no_mangle]
pub unsafe extern "C" fn rpg_aabbindex_f(aabbindex: *mut rpg_aabbindex) {
    if !aabbindex.is_null() {
        drop(Box::from_raw(aabbindex))
    }
}

/// Wraps [orientation_eps].
///
/// `orientation` is used as an out parameter: 0 = collinear, 1 = clockwise, 2 = counter clockwise.
///
/// # Safety
///
/// `orientation` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_orientation(
    p: rpg_point,
    q: rpg_point,
    r: rpg_point,
    collinear_eps: f64,
    orientation: *mut u8,
) -> i32 {
    ffi_catch_unwind!("rpg_orientation", {
        let o = orientation_eps(p.to_internal(), q.to_internal(), r.to_internal(), collinear_eps);
        orientation.write(orientation_to_u8(o));
        0
    })
}

/// Wraps [on_segment_eps].
///
/// `eps` is a length margin added to every side of the bounding box, 0 gives the closed box used by
/// the intersection and membership tests.
/// `result` is used as an out parameter, written non-zero if `q` lies within the bounding box of
/// `p` and `r`. Only meaningful for collinear points.
///
/// # Safety
///
/// `result` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_on_segment(
    p: rpg_point,
    q: rpg_point,
    r: rpg_point,
    eps: f64,
    result: *mut u8,
) -> i32 {
    ffi_catch_unwind!("rpg_on_segment", {
        let on = on_segment_eps(p.to_internal(), q.to_internal(), r.to_internal(), eps);
        result.write(on as u8);
        0
    })
}

/// Wraps [segments_intersect_eps].
///
/// `result` is used as an out parameter, written non-zero if segment `p1 -> q1` and segment
/// `p2 -> q2` share at least one point.
///
/// # Safety
///
/// `result` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpg_segments_intersect(
    p1: rpg_point,
    q1: rpg_point,
    p2: rpg_point,
    q2: rpg_point,
    collinear_eps: f64,
    result: *mut u8,
) -> i32 {
    ffi_catch_unwind!("rpg_segments_intersect", {
        let intersect = segments_intersect_eps(
            p1.to_internal(),
            q1.to_internal(),
            p2.to_internal(),
            q2.to_internal(),
            collinear_eps,
        );
        result.write(intersect as u8);
        0
    })
}
