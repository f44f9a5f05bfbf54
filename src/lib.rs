//! Procedural **lobed solids**: a recursive star-shaped outline, a greedy
//! ear-clipping triangulation that prefers 120° ears, and an extrusion with a
//! rounded bevel into a closed, renderer-ready triangle mesh.
//!
//! ```rust
//! use polybevel::{Shape, ShapeConfig};
//!
//! let config = ShapeConfig::default().with_depth(2).with_jitter(0.0).with_seed(3);
//! let shape = Shape::generate(&config).unwrap();
//! assert_eq!(shape.triangulation.len(), shape.outline.len() - 2);
//! assert!(shape.mesh.is_manifold());
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export of meshes
//! - **svg-io**: draw outlines and their triangulations as SVG
//! - **hashmap**: use hashbrown for the edge tables of `analyze_manifold`
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for multithreading

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod errors;
pub mod extrude;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod outline;
pub mod shape;
pub mod triangulate;
pub mod triangulated;
pub mod vector;

#[cfg(any(
    all(feature = "f64", feature = "f32"),
    not(any(feature = "f64", feature = "f32"))
))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::ShapeConfig;
pub use errors::{ErrorKind, GeometryError};
pub use extrude::extrude;
pub use mesh::Mesh3D;
pub use outline::{Outline, OutlineGenerator, generate_outline};
pub use shape::Shape;
pub use triangulate::{Triangulation, triangulate};
