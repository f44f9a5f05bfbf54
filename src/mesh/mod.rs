//! `Mesh3D`, the index-aligned vertex/uv/triangle buffers handed to a renderer.

use crate::errors::GeometryError;
use crate::float_types::{
    Real,
    tolerance,
    parry3d::{
        bounding_volume::Aabb,
        mass_properties::MassProperties,
        shape::{Shape, TriMesh},
    },
};
use nalgebra::{Point2, Point3, Vector3};

pub mod manifold;
pub mod vertex;

pub use manifold::ManifoldReport;
pub use vertex::{GpuVertex, Vertex};

/// A triangle mesh as flat, index-aligned buffers.
///
/// `positions[i]` and `uvs[i]` describe vertex `i`; every triangle in
/// `indices` refers to those vertices. The mesh owns its buffers until it is
/// handed to a renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh3D {
    pub positions: Vec<Point3<Real>>,
    pub uvs: Vec<Point2<Real>>,
    pub indices: Vec<[u32; 3]>,
}

/// Flat `f32`/`u32` buffers in the layout a GPU upload expects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderBuffers {
    /// `x, y, z` per vertex.
    pub positions: Vec<f32>,
    /// Smooth `x, y, z` normal per vertex.
    pub normals: Vec<f32>,
    /// `u, v` per vertex.
    pub uvs: Vec<f32>,
    /// Three indices per triangle.
    pub indices: Vec<u32>,
}

impl Mesh3D {
    pub const fn new(
        positions: Vec<Point3<Real>>,
        uvs: Vec<Point2<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Self {
        Mesh3D { positions, uvs, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Check that the buffers are index-aligned and every index is in range.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.positions.len() != self.uvs.len() {
            return Err(GeometryError::UvCountMismatch {
                positions: self.positions.len(),
                uvs: self.uvs.len(),
            });
        }
        let len = self.positions.len();
        for tri in &self.indices {
            for &index in tri {
                if index as usize >= len {
                    return Err(GeometryError::IndexOutOfRange { index: index as usize, len });
                }
            }
        }
        Ok(())
    }

    /// Positions of the three corners of triangle `tri`, if they all exist.
    fn corners(&self, tri: &[u32; 3]) -> Option<[Point3<Real>; 3]> {
        match tri.map(|i| self.positions.get(i as usize)) {
            [Some(&a), Some(&b), Some(&c)] => Some([a, b, c]),
            _ => None,
        }
    }

    /// Unnormalized face normal of every triangle (length is twice its area).
    ///
    /// Triangles referring to missing vertices get a zero normal.
    pub fn face_normals(&self) -> Vec<Vector3<Real>> {
        self.indices
            .iter()
            .map(|tri| match self.corners(tri) {
                Some([a, b, c]) => (b - a).cross(&(c - a)),
                None => Vector3::zeros(),
            })
            .collect()
    }

    /// **Smooth vertex normals**
    ///
    /// Each vertex normal is the normalized sum of the face normals of every
    /// triangle that uses it. Face normals are not normalized before summing,
    /// so larger triangles weigh more. Vertices with no usable neighbourhood
    /// get a zero normal.
    pub fn vertex_normals(&self) -> Vec<Vector3<Real>> {
        let mut normals = vec![Vector3::zeros(); self.positions.len()];
        for (tri, face) in self.indices.iter().zip(self.face_normals()) {
            for &i in tri {
                if let Some(n) = normals.get_mut(i as usize) {
                    *n += face;
                }
            }
        }
        for n in &mut normals {
            *n = n.try_normalize(tolerance()).unwrap_or_else(Vector3::zeros);
        }
        normals
    }

    /// Every vertex with its smooth normal and uv.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.uvs)
            .zip(self.vertex_normals())
            .map(|((&pos, &uv), normal)| Vertex::new(pos, normal, uv))
            .collect()
    }

    /// Interleaved GPU vertices, ready for `bytemuck::cast_slice`.
    pub fn gpu_vertices(&self) -> Vec<GpuVertex> {
        self.vertices().iter().map(Vertex::to_gpu).collect()
    }

    #[allow(clippy::unnecessary_cast)]
    pub fn flat_positions(&self) -> Vec<f32> {
        self.positions
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    #[allow(clippy::unnecessary_cast)]
    pub fn flat_uvs(&self) -> Vec<f32> {
        self.uvs
            .iter()
            .flat_map(|uv| [uv.x as f32, uv.y as f32])
            .collect()
    }

    #[allow(clippy::unnecessary_cast)]
    pub fn flat_normals(&self) -> Vec<f32> {
        self.vertex_normals()
            .iter()
            .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
            .collect()
    }

    pub fn flat_indices(&self) -> Vec<u32> {
        self.indices.iter().flatten().copied().collect()
    }

    /// Everything a renderer needs, including smooth normals.
    ///
    /// ## Errors
    /// Whatever [`Mesh3D::validate`] reports.
    pub fn to_render_buffers(&self) -> Result<RenderBuffers, GeometryError> {
        self.validate()?;
        Ok(RenderBuffers {
            positions: self.flat_positions(),
            normals: self.flat_normals(),
            uvs: self.flat_uvs(),
            indices: self.flat_indices(),
        })
    }

    /// Axis-aligned bounds of all vertices.
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_points(&self.positions)
    }

    /// Convert this mesh to a Parry `TriMesh`.\
    /// Useful for collision detection.
    ///
    /// ## Errors
    /// [`GeometryError::TriMesh`] if Parry returns a `TriMeshBuilderError`.
    pub fn to_trimesh(&self) -> Result<TriMesh, GeometryError> {
        self.validate()?;
        TriMesh::new(self.positions.clone(), self.indices.clone())
            .map_err(|err| GeometryError::TriMesh(err.to_string()))
    }

    /// Mass properties of the enclosed solid using Parry.
    ///
    /// Only meaningful for closed, outward-facing meshes.
    pub fn mass_properties(&self, density: Real) -> Result<MassProperties, GeometryError> {
        Ok(self.to_trimesh()?.mass_properties(density))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh3D {
        Mesh3D::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        )
    }

    #[test]
    fn flat_buffers_are_aligned() {
        let buffers = quad().to_render_buffers().unwrap();
        assert_eq!(buffers.positions.len(), 12);
        assert_eq!(buffers.normals.len(), 12);
        assert_eq!(buffers.uvs.len(), 8);
        assert_eq!(buffers.indices, vec![0, 1, 2, 0, 2, 3]);
        // every normal of a flat counter-clockwise quad is +Z
        for n in buffers.normals.chunks(3) {
            assert_eq!(n, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn validate_catches_bad_buffers() {
        let mut mesh = quad();
        mesh.indices.push([0, 1, 7]);
        assert_eq!(
            mesh.validate(),
            Err(GeometryError::IndexOutOfRange { index: 7, len: 4 })
        );

        let mut mesh = quad();
        mesh.uvs.pop();
        assert_eq!(
            mesh.validate(),
            Err(GeometryError::UvCountMismatch { positions: 4, uvs: 3 })
        );
    }

    #[test]
    fn unused_vertex_gets_zero_normal() {
        let mut mesh = quad();
        mesh.positions.push(Point3::new(5.0, 5.0, 5.0));
        mesh.uvs.push(Point2::origin());
        let normals = mesh.vertex_normals();
        assert_eq!(normals[4], Vector3::zeros());
    }

    #[test]
    fn bounds() {
        let aabb = quad().bounding_box();
        assert_eq!(aabb.mins, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(aabb.maxs, Point3::new(1.0, 1.0, 0.0));
    }
}
