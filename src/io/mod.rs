//! Output surfaces: STL export of meshes and SVG rendering of outlines.

use crate::errors::GeometryError;

#[cfg(feature = "svg-io")]
pub mod svg;

#[cfg(feature = "stl-io")]
pub mod stl;

#[cfg(feature = "svg-io")]
pub use self::svg::CanvasPainter;

#[cfg(feature = "stl-io")]
pub use self::stl::{to_stl_ascii, to_stl_binary};

/// Generic I/O and format‑conversion errors.
///
/// Many I/O features are behind cargo feature‑flags.
/// When a feature is disabled the corresponding functions do not exist.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),

    #[error("Geometry is not exportable: {0}")]
    Geometry(#[from] GeometryError),
}
