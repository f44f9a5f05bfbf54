use crate::float_types::{Real, tolerance};
use crate::io::IoError;
use crate::mesh::{Mesh3D, Vertex};
use crate::triangulated::Triangulated3D;
use nalgebra::Vector3;
use std::io::Cursor;

/// Facet normal from the winding of the triangle; zero for degenerate facets.
fn facet_normal(tri: &[Vertex; 3]) -> Vector3<Real> {
    let [a, b, c] = tri.map(|v| v.pos);
    (b - a)
        .cross(&(c - a))
        .try_normalize(tolerance())
        .unwrap_or_else(Vector3::zeros)
}

/// Export to ASCII STL
/// Convert this shape to an **ASCII STL** string with the given `name`.
///
/// ```rust
/// # use polybevel::{Shape, ShapeConfig};
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let shape = Shape::generate(&ShapeConfig::default().with_seed(1).with_jitter(0.0))?;
/// let text = shape.mesh.to_stl_ascii("lobes");
/// assert!(text.starts_with("solid lobes"));
/// # Ok(())
/// # }
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri);
        out.push_str(&format!(
            "  facet normal {:.6} {:.6} {:.6}\n",
            n.x, n.y, n.z
        ));
        out.push_str("    outer loop\n");
        for v in &tri {
            let p = v.pos;
            out.push_str(&format!(
                "      vertex {:.6} {:.6} {:.6}\n",
                p.x, p.y, p.z
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// The resulting `Vec<u8>` can then be written to a file or handled in memory.
pub fn to_stl_binary<T: Triangulated3D>(shape: &T) -> Result<Vec<u8>, IoError> {
    use stl_io::{Normal, Triangle, Vertex as StlVertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri);
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|v| {
                    let p = v.pos;
                    StlVertex::new([p.x as f32, p.y as f32, p.z as f32])
                }),
            });
        }
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

impl Mesh3D {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }

    pub fn to_stl_binary(&self) -> Result<Vec<u8>, IoError> {
        self.validate()?;
        self::to_stl_binary(self)
    }
}
