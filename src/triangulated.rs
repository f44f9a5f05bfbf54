/// A trait for any shape which can be represented by triangles
use crate::mesh::{Mesh3D, Vertex};

/// A triangulated 3D surface.
///
/// Anything that can present itself as a bunch of triangles in 3D
/// can automatically use all the triangle-based IO backends.
pub trait Triangulated3D {
    /// Call `f` for each triangle.
    ///
    /// The triangle is `[v0, v1, v2]` with positions, normals and uvs.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]);
}

impl Triangulated3D for Mesh3D {
    /// Visits the triangles in index-buffer order, each vertex carrying its smooth normal.
    /// Triangles referring to missing vertices are skipped.
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        let vertices = self.vertices();
        for tri in &self.indices {
            if let [Some(&a), Some(&b), Some(&c)] = tri.map(|i| vertices.get(i as usize)) {
                f([a, b, c]);
            }
        }
    }
}
