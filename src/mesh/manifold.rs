use crate::mesh::Mesh3D;

#[cfg(feature = "hashmap")]
use hashbrown::HashMap;
#[cfg(not(feature = "hashmap"))]
use std::collections::HashMap;

/// Edge statistics of an indexed triangle mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ManifoldReport {
    /// Distinct undirected edges.
    pub edges: usize,
    /// Edges used by exactly one triangle (open edges).
    pub boundary_edges: usize,
    /// Edges used by more than two triangles.
    pub non_manifold_edges: usize,
    /// Directed edges that occur more than once, i.e. neighbours with flipped winding.
    pub orientation_conflicts: usize,
    /// Every edge is shared by exactly two triangles.
    pub is_manifold: bool,
    /// Manifold, and every shared edge is traversed once in each direction.
    pub is_oriented: bool,
}

impl Mesh3D {
    /// Count how often every edge is used.
    ///
    /// Edges are keyed by vertex index, so two vertices at the same position
    /// are still different vertices here.
    pub fn analyze_manifold(&self) -> ManifoldReport {
        let mut undirected: HashMap<(u32, u32), u32> = HashMap::new();
        let mut directed: HashMap<(u32, u32), u32> = HashMap::new();

        for tri in &self.indices {
            for &(i0, i1) in &[(0, 1), (1, 2), (2, 0)] {
                let (a, b) = (tri[i0], tri[i1]);
                *directed.entry((a, b)).or_insert(0) += 1;
                // Order them so (a, b) and (b, a) become the same key
                let key = if a < b { (a, b) } else { (b, a) };
                *undirected.entry(key).or_insert(0) += 1;
            }
        }

        let boundary_edges = undirected.values().filter(|&&count| count == 1).count();
        let non_manifold_edges = undirected.values().filter(|&&count| count > 2).count();
        let orientation_conflicts = directed.values().filter(|&&count| count > 1).count();
        let is_manifold = boundary_edges == 0 && non_manifold_edges == 0;

        ManifoldReport {
            edges: undirected.len(),
            boundary_edges,
            non_manifold_edges,
            orientation_conflicts,
            is_manifold,
            is_oriented: is_manifold && orientation_conflicts == 0,
        }
    }

    /// Checks if the mesh is a closed 2-manifold
    ///
    /// ### Returns
    /// Returns `true` if every edge appears exactly 2 times
    pub fn is_manifold(&self) -> bool {
        self.analyze_manifold().is_manifold
    }
}

#[cfg(test)]
mod tests {
    use crate::mesh::Mesh3D;
    use nalgebra::{Point2, Point3};

    fn tetrahedron(flip_last: bool) -> Mesh3D {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let uvs = vec![Point2::origin(); 4];
        let mut indices = vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]];
        if flip_last {
            indices[3] = [0, 2, 3];
        }
        Mesh3D::new(positions, uvs, indices)
    }

    #[test]
    fn closed_tetrahedron() {
        let report = tetrahedron(false).analyze_manifold();
        assert_eq!(report.edges, 6);
        assert_eq!(report.boundary_edges, 0);
        assert!(report.is_manifold);
        assert!(report.is_oriented);
    }

    #[test]
    fn flipped_face_is_manifold_but_not_oriented() {
        let report = tetrahedron(true).analyze_manifold();
        assert!(report.is_manifold);
        assert!(!report.is_oriented);
        assert_eq!(report.orientation_conflicts, 3);
    }

    #[test]
    fn open_surface() {
        let mut mesh = tetrahedron(false);
        mesh.indices.pop();
        let report = mesh.analyze_manifold();
        assert_eq!(report.boundary_edges, 3);
        assert!(!mesh.is_manifold());
    }
}
