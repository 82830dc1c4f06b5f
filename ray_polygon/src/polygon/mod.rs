//! Polygon vertex storage and the ray casting point-in-polygon membership test.
mod internal;
mod point;
mod point_in_polygon;
mod poly;
mod polygon_types;
mod traits;

pub use point::Point;
pub use point_in_polygon::{
    point_in_polygon, point_in_polygon_eps, point_in_polygon_exact, point_in_polygon_opt,
};
pub use poly::Polygon;
pub use polygon_types::PointInsideOptions;
pub use traits::VertexPosition;
