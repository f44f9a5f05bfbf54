mod support;

use polybevel::float_types::Real;
use polybevel::mesh::{GpuVertex, Mesh3D};
use polybevel::{Outline, extrude, triangulate};
use support::*;

fn hexagon_solid() -> (Outline, Mesh3D) {
    let outline = regular_outline(6, 1);
    let triangulation = triangulate(&outline).unwrap();
    let mesh = extrude(&outline, &triangulation, 0.05, 6).unwrap();
    (outline, mesh)
}

#[test]
fn render_buffers_are_index_aligned() {
    let (_, mesh) = hexagon_solid();
    let buffers = mesh.to_render_buffers().unwrap();
    let v = mesh.vertex_count();
    assert_eq!(buffers.positions.len(), 3 * v);
    assert_eq!(buffers.normals.len(), 3 * v);
    assert_eq!(buffers.uvs.len(), 2 * v);
    assert_eq!(buffers.indices.len(), 3 * mesh.triangle_count());
    assert!(buffers.indices.iter().all(|&i| (i as usize) < v));
}

#[test]
fn smooth_normals_face_outward() {
    let (outline, mesh) = hexagon_solid();
    let n = outline.len();
    let normals = mesh.vertex_normals();
    for normal in &normals {
        assert!(approx_eq(normal.norm(), 1.0, 1e-9));
    }
    for (k, normal) in normals.iter().enumerate() {
        let radial = mesh.positions[k].xy().coords.dot(&normal.xy());
        assert!(radial >= 0.0, "vertex {k} normal points inward");
    }
    assert!(normals[..n].iter().all(|normal| normal.z < 0.0));
    assert!(normals[n..2 * n].iter().all(|normal| normal.z > 0.0));
}

#[test]
fn gpu_vertices_cast_to_bytes() {
    let (_, mesh) = hexagon_solid();
    let vertices = mesh.gpu_vertices();
    assert_eq!(vertices.len(), mesh.vertex_count());
    let bytes: &[u8] = bytemuck::cast_slice(&vertices);
    assert_eq!(bytes.len(), vertices.len() * GpuVertex::STRIDE);
}

#[test]
fn parry_sees_a_positive_volume() {
    let (outline, mesh) = hexagon_solid();
    let mass = mesh.mass_properties(1.0).unwrap().mass();
    let slab = outline.signed_area() * 0.05;
    let aabb = mesh.bounding_box();
    let extents = aabb.extents();
    assert!(mass > slab, "{mass} <= {slab}");
    assert!(mass < extents.x * extents.y * extents.z);
}

#[test]
fn trimesh_keeps_every_triangle() {
    let (_, mesh) = hexagon_solid();
    let trimesh = mesh.to_trimesh().unwrap();
    assert_eq!(trimesh.indices().len(), mesh.triangle_count());
    assert_eq!(trimesh.vertices().len(), mesh.vertex_count());
}

#[test]
fn empty_mesh_is_rejected_by_parry() {
    let mesh = Mesh3D::default();
    assert!(mesh.to_trimesh().is_err());
}

#[cfg(feature = "stl-io")]
#[test]
fn stl_ascii_has_one_facet_per_triangle() {
    let (_, mesh) = hexagon_solid();
    let text = mesh.to_stl_ascii("hexagon");
    assert!(text.starts_with("solid hexagon\n"));
    assert!(text.ends_with("endsolid hexagon\n"));
    assert_eq!(text.matches("facet normal").count(), mesh.triangle_count());
}

#[cfg(feature = "stl-io")]
#[test]
fn stl_binary_reads_back() -> Result<(), Box<dyn std::error::Error>> {
    let (_, mesh) = hexagon_solid();
    let bytes = mesh.to_stl_binary()?;
    assert_eq!(bytes.len(), 84 + 50 * mesh.triangle_count());

    let read = stl_io::read_stl(&mut std::io::Cursor::new(bytes))?;
    assert_eq!(read.faces.len(), mesh.triangle_count());
    Ok(())
}

#[cfg(feature = "svg-io")]
#[test]
fn canvas_draws_points_then_triangles() {
    use polybevel::io::CanvasPainter;

    let outline = regular_outline(6, 2);
    let triangulation = triangulate(&outline).unwrap();
    let svg = CanvasPainter::new(400.0)
        .paint_to_string(&outline, Some(&triangulation))
        .unwrap();
    assert_eq!(svg.matches("<circle").count(), outline.len());
    assert_eq!(svg.matches("<path").count(), 1 + triangulation.len());

    let first_circle = svg.find("<circle").unwrap();
    let last_path = svg.rfind("<path").unwrap();
    assert!(first_circle < last_path);
}

#[test]
fn flat_uvs_stay_in_the_unit_square() {
    let (_, mesh) = hexagon_solid();
    for uv in mesh.flat_uvs() {
        assert!((0.0..=1.0).contains(&(uv as Real)));
    }
}
