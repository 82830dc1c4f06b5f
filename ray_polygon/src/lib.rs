//! This crate tests whether a point lies inside a planar polygon using ray casting.
//!
//! The membership test is built on two primitives found in [core::math]: the orientation of an
//! ordered triplet of points and the segment/segment intersection test. Floating point predicates
//! take their collinear tolerance explicitly (`_eps` functions) or default to
//! [FuzzyEq::fuzzy_epsilon](core::traits::FuzzyEq::fuzzy_epsilon), integer coordinates can use the
//! exact `_exact` predicates.
//!
//! # Examples
//!
//! ```
//! use ray_polygon::core::math::Vector2;
//! use ray_polygon::polygon;
//!
//! let square = polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
//! assert!(square.is_inside(Vector2::new(2.0, 2.0)));
//! assert!(square.is_inside(Vector2::new(0.0, 0.0)));
//! assert!(!square.is_inside(Vector2::new(5.0, 5.0)));
//! ```
#![forbid(unsafe_code)]

#[macro_use]
mod macros;
pub mod core;
pub mod geometry;
pub mod polygon;

pub use static_aabb2d_index;
