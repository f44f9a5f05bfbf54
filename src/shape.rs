//! The full pipeline: outline, then triangulation, then extrusion.

use crate::config::ShapeConfig;
use crate::errors::GeometryError;
use crate::extrude::extrude;
use crate::mesh::Mesh3D;
use crate::outline::Outline;
use crate::triangulate::{Triangulation, triangulate};
use log::info;
use rand::Rng;

/// All artifacts of one pipeline run.
///
/// `triangulation` indexes into `outline`, and `mesh` vertices `[0, N)` are
/// the outline points on the front cap.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub outline: Outline,
    pub triangulation: Triangulation,
    pub mesh: Mesh3D,
}

impl Shape {
    /// Run the pipeline with the rng described by `config.seed`.
    ///
    /// A failed roll is not retried here; callers wanting a shape no matter
    /// what should pick a new seed on [`ErrorKind::DegenerateGeometry`].
    ///
    /// [`ErrorKind::DegenerateGeometry`]: crate::errors::ErrorKind::DegenerateGeometry
    pub fn generate(config: &ShapeConfig) -> Result<Shape, GeometryError> {
        let mut rng = config.rng();
        Self::generate_with_rng(config, &mut rng)
    }

    /// Run the pipeline drawing jitter from `rng`; `config.seed` is ignored.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        config: &ShapeConfig,
        rng: &mut R,
    ) -> Result<Shape, GeometryError> {
        config.validate()?;
        let outline = config.outline_generator().generate(rng)?;
        let triangulation = triangulate(&outline)?;
        let mesh = extrude(&outline, &triangulation, config.thickness, config.bevel_rings)?;
        info!(
            "shape: {} outline points, {} triangles, {} mesh vertices",
            outline.len(),
            triangulation.len(),
            mesh.vertex_count()
        );
        Ok(Shape {
            outline,
            triangulation,
            mesh,
        })
    }
}
