//! Extrusion of a triangulated outline into a closed solid with rounded side edges.

use crate::errors::GeometryError;
use crate::float_types::{PI, Real, tolerance};
use crate::mesh::Mesh3D;
use crate::outline::{Outline, Winding};
use crate::triangulate::Triangulation;
use crate::vector::PlanarVector;
use log::{debug, trace};
use nalgebra::{Point2, Point3, Vector2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// **Extrusion with a rounded bevel**
///
/// Builds a closed solid of the given `thickness` from `outline` and its
/// `triangulation`.
///
/// ## **Layout**
/// With `N` outline points and `R = bevel_rings`:
/// - vertices `[0, N)`: front cap at `z = -thickness/2`, triangles copied from
///   `triangulation`;
/// - vertices `[N, 2N)`: back cap at `z = +thickness/2`, triangles offset by
///   `N` with their last two indices swapped;
/// - vertices `[2N + kN, 2N + (k+1)N)` for `k in 0..R-1`: intermediate rings.
///
/// Triangles are the front cap, the back cap, then the side wall ring pair by
/// ring pair (front → ring 0 → … → ring R-2 → back). Every vertex gets the
/// outline coordinate shifted by `(0.5, 0.5)` as its uv.
///
/// ## **Bevel profile**
/// Ring `k` sits at phase `φ = π/R · (k+1)`. Its points are pushed out along
/// the outward corner bisector by `thickness/2 · sin φ` and placed at
/// `z = -thickness/2 · cos φ`, tracing a half ellipse from the front cap to
/// the back cap.
///
/// With a triangulation from [`triangulate`](crate::triangulate::triangulate)
/// the result is a closed, consistently oriented manifold facing outward.
///
/// ## Errors
/// - [`GeometryError::NonPositiveThickness`], [`GeometryError::ZeroBevelRings`]
/// - [`GeometryError::TooFewPoints`], [`GeometryError::TriangleCountMismatch`],
///   [`GeometryError::IndexOutOfRange`] when outline and triangulation disagree
/// - [`GeometryError::ZeroLengthVector`], [`GeometryError::StraightCorner`] for
///   corners without a bevel direction
/// - [`GeometryError::IndexOverflow`] if the vertex count exceeds `u32`
pub fn extrude(
    outline: &Outline,
    triangulation: &Triangulation,
    thickness: Real,
    bevel_rings: usize,
) -> Result<Mesh3D, GeometryError> {
    if !(thickness > 0.0 && thickness.is_finite()) {
        return Err(GeometryError::NonPositiveThickness(thickness));
    }
    if bevel_rings == 0 {
        return Err(GeometryError::ZeroBevelRings);
    }
    check_inputs(outline, triangulation)?;

    let points = outline.points();
    let n = points.len();
    let vertex_count = bevel_rings
        .checked_add(1)
        .and_then(|rings| n.checked_mul(rings))
        .ok_or(GeometryError::IndexOverflow(usize::MAX))?;
    let n32 = u32::try_from(n).map_err(|_| GeometryError::IndexOverflow(vertex_count))?;
    u32::try_from(vertex_count).map_err(|_| GeometryError::IndexOverflow(vertex_count))?;

    let winding = outline.winding();
    let half = thickness / 2.0;

    let mut positions: Vec<Point3<Real>> = Vec::with_capacity(vertex_count);
    positions.extend(points.iter().map(|p| Point3::new(p.x, p.y, -half)));
    positions.extend(points.iter().map(|p| Point3::new(p.x, p.y, half)));

    let directions = bevel_directions(outline, winding)?;
    let rings = bevel_rings_points(points, &directions, half, bevel_rings);
    for ring in rings {
        positions.extend(ring);
    }

    let uvs: Vec<Point2<Real>> = (0..=bevel_rings)
        .flat_map(|_| points.iter().map(|p| Point2::new(p.x + 0.5, p.y + 0.5)))
        .collect();

    let mut indices: Vec<[u32; 3]> = Vec::with_capacity(2 * (n - 2) + 2 * n * bevel_rings);
    indices.extend(triangulation.iter().map(|t| t.map(|i| i as u32)));
    indices.extend(
        triangulation
            .iter()
            .map(|t| [t[0] as u32 + n32, t[2] as u32 + n32, t[1] as u32 + n32]),
    );

    // front, intermediate rings in order, back
    let ring_indices: Vec<Vec<u32>> = std::iter::once(0)
        .chain((0..bevel_rings - 1).map(|k| 2 + k as u32))
        .chain(std::iter::once(1))
        .map(|slot| (0..n32).map(|j| slot * n32 + j).collect())
        .collect();
    for pair in ring_indices.windows(2) {
        indices.extend(bridge_rings(&pair[0], &pair[1])?);
    }

    // The layout above faces outward for counter-clockwise outlines.
    if winding == Winding::Clockwise {
        for tri in &mut indices {
            tri.swap(1, 2);
        }
    }

    debug!(
        "extruded {} points: thickness={} bevel_rings={} -> {} vertices, {} triangles",
        n,
        thickness,
        bevel_rings,
        positions.len(),
        indices.len()
    );
    Ok(Mesh3D::new(positions, uvs, indices))
}

fn check_inputs(outline: &Outline, triangulation: &Triangulation) -> Result<(), GeometryError> {
    let n = outline.len();
    if n < 3 {
        return Err(GeometryError::TooFewPoints(n));
    }
    if triangulation.len() != n - 2 {
        return Err(GeometryError::TriangleCountMismatch {
            expected: n - 2,
            actual: triangulation.len(),
        });
    }
    if let Some(&index) = triangulation.iter().flatten().find(|&&i| i >= n) {
        return Err(GeometryError::IndexOutOfRange { index, len: n });
    }
    Ok(())
}

/// Unit outward bisector at every outline corner.
///
/// The bisector of `previous - current` and `next - current` is flipped by
/// the sign of their cross product (the local turn), then by the outline's
/// winding, so it always points away from the interior.
pub fn bevel_directions(
    outline: &Outline,
    winding: Winding,
) -> Result<Vec<Vector2<Real>>, GeometryError> {
    let points = outline.points();
    (0..points.len())
        .map(|j| {
            let c = points[j];
            let (p, n) = outline.neighbors(j);
            let to_prev = p - c;
            let to_next = n - c;
            let turn = to_prev.cross_2d(&to_next);
            // |sin| of the corner angle
            if turn.abs() <= tolerance() * to_prev.norm() * to_next.norm() {
                return Err(GeometryError::StraightCorner(j));
            }
            let bisector = (to_prev + to_next).checked_normalize()?;
            Ok(bisector * turn.signum() * winding.sign())
        })
        .collect()
}

fn ring_at(
    points: &[Point2<Real>],
    directions: &[Vector2<Real>],
    half: Real,
    phase: Real,
) -> Vec<Point3<Real>> {
    let (x, y) = (half * phase.cos(), half * phase.sin());
    points
        .iter()
        .zip(directions)
        .map(|(c, o)| {
            let offset = *c + *o * y;
            Point3::new(offset.x, offset.y, -x)
        })
        .collect()
}

/// The `bevel_rings - 1` intermediate rings, in ring order.
fn bevel_rings_points(
    points: &[Point2<Real>],
    directions: &[Vector2<Real>],
    half: Real,
    bevel_rings: usize,
) -> Vec<Vec<Point3<Real>>> {
    let phase = |k: usize| PI / bevel_rings as Real * (k + 1) as Real;

    #[cfg(feature = "parallel")]
    let rings: Vec<Vec<Point3<Real>>> = (0..bevel_rings - 1)
        .into_par_iter()
        .map(|k| ring_at(points, directions, half, phase(k)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let rings: Vec<Vec<Point3<Real>>> = (0..bevel_rings - 1)
        .map(|k| ring_at(points, directions, half, phase(k)))
        .collect();

    trace!("built {} intermediate bevel rings", rings.len());
    rings
}

/// Stitch two rings of equal length with two triangles per edge.
///
/// For consecutive `a[i], a[i+1]` and the matching `b[i], b[i+1]` (wrapping
/// around) the triangles are `(a[i], a[i+1], b[i+1])` and `(a[i], b[i+1], b[i])`.
///
/// ## Errors
/// [`GeometryError::RingLengthMismatch`] if the rings differ in length.
pub fn bridge_rings(a: &[u32], b: &[u32]) -> Result<Vec<[u32; 3]>, GeometryError> {
    if a.len() != b.len() {
        return Err(GeometryError::RingLengthMismatch {
            first: a.len(),
            second: b.len(),
        });
    }
    let len = a.len();
    let mut triangles = Vec::with_capacity(len * 2);
    for i in 0..len {
        let p11 = a[i];
        let p12 = a[(i + 1) % len];
        let p21 = b[i];
        let p22 = b[(i + 1) % len];
        triangles.push([p11, p12, p22]);
        triangles.push([p11, p22, p21]);
    }
    Ok(triangles)
}
