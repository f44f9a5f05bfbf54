//! Greedy ear-clipping triangulation of simple polygons.

use crate::errors::GeometryError;
use crate::float_types::{PI, Real};
use crate::outline::{Outline, Winding};
use crate::vector::PlanarVector;
use log::{debug, trace};
use nalgebra::Point2;

/// Corner angle the ear selection aims for: 120°.
pub const TARGET_EAR_ANGLE: Real = PI * 2.0 / 3.0;

/// Three indices into an [`Outline`].
pub type IndexTriangle = [usize; 3];

/// Ordered triangles covering the interior of one outline.
///
/// Only meaningful together with the outline it was computed from; it is not
/// updated if that outline changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Triangulation {
    pub triangles: Vec<IndexTriangle>,
}

impl Triangulation {
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexTriangle> {
        self.triangles.iter()
    }

    /// Resolve every triangle to its three points in `outline`.
    ///
    /// ## Errors
    /// [`GeometryError::IndexOutOfRange`] if an index does not exist in `outline`.
    pub fn resolve(&self, outline: &Outline) -> Result<Vec<[Point2<Real>; 3]>, GeometryError> {
        let points = outline.points();
        self.triangles
            .iter()
            .map(|tri| {
                let mut out = [Point2::origin(); 3];
                for (slot, &index) in out.iter_mut().zip(tri) {
                    *slot = *points.get(index).ok_or(GeometryError::IndexOutOfRange {
                        index,
                        len: points.len(),
                    })?;
                }
                Ok(out)
            })
            .collect()
    }

    /// Sum of the signed triangle areas.
    ///
    /// Triangles produced by [`triangulate`] wind opposite to their outline,
    /// so this is `-outline.signed_area()` for them.
    pub fn signed_area(&self, outline: &Outline) -> Result<Real, GeometryError> {
        Ok(self
            .resolve(outline)?
            .iter()
            .map(|[a, b, c]| (b - a).cross_2d(&(c - a)) / 2.0)
            .sum())
    }
}

impl<'a> IntoIterator for &'a Triangulation {
    type Item = &'a IndexTriangle;
    type IntoIter = std::slice::Iter<'a, IndexTriangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

/// **Greedy ear clipping with a 120° preference**
///
/// Repeatedly cuts one ear off a working list of point indices until two
/// points are left, producing exactly `N - 2` triangles for `N` points.
///
/// ## **Ear selection**
/// The working list is a clockwise walk of the outline (a counter-clockwise
/// outline is walked backwards). For every position the corner angle at
/// `current` is the sweep from `current → previous` to `current → next`,
/// which is below π exactly at convex corners. A corner is an ear when it is
/// convex and no other remaining point lies inside or on the triangle
/// `(previous, current, next)`. Among the ears the one whose angle is closest
/// to [`TARGET_EAR_ANGLE`] wins; on ties the earliest position wins.
///
/// ## **Output**
/// Each ear is emitted as `[next, current, previous]`, with next/previous
/// taken along the outline's own order, so every triangle winds opposite to
/// the outline. Indices always refer to `outline`.
///
/// ## **Cost**
/// `O(n³)` in the worst case; meant for outlines of at most a few hundred points.
///
/// ## Errors
/// - [`GeometryError::TooFewPoints`] for fewer than three points.
/// - [`GeometryError::NoEarFound`] when a pass finds no ear, which happens for
///   self-intersecting outlines.
/// - [`GeometryError::ZeroLengthVector`] when two consecutive remaining points coincide.
pub fn triangulate(outline: &Outline) -> Result<Triangulation, GeometryError> {
    let points = outline.points();
    let n = points.len();
    if n < 3 {
        return Err(GeometryError::TooFewPoints(n));
    }

    let backwards = outline.winding() != Winding::Clockwise;
    let mut working: Vec<usize> = if backwards {
        (0..n).rev().collect()
    } else {
        (0..n).collect()
    };

    let mut triangles = Vec::with_capacity(n - 2);
    while working.len() > 2 {
        let (position, [wp, c, wn]) = best_ear(points, &working)?;
        let ear = if backwards { [wp, c, wn] } else { [wn, c, wp] };
        trace!("clipped ear {ear:?} at working position {position}");
        working.remove(position);
        triangles.push(ear);
    }

    debug!("triangulated {} points into {} triangles", n, triangles.len());
    Ok(Triangulation { triangles })
}

/// Find the ear to clip next.
///
/// Returns its position in `working` and the `(previous, current, next)`
/// indices in working-list order.
fn best_ear(
    points: &[Point2<Real>],
    working: &[usize],
) -> Result<(usize, [usize; 3]), GeometryError> {
    let len = working.len();
    let mut best_diff = Real::INFINITY;
    let mut best_position = None;
    let mut best_corner = [0; 3];

    for i in 0..len {
        let ip = working[(i + len - 1) % len];
        let ic = working[i];
        let inext = working[(i + 1) % len];
        let (p, c, n) = (points[ip], points[ic], points[inext]);

        let angle = corner_angle(&p, &c, &n)?;
        let diff = (angle - TARGET_EAR_ANGLE).abs();
        if angle >= PI || diff >= best_diff {
            continue;
        }

        // Only corners that would become the new best pay for the containment scan.
        let blocked = working
            .iter()
            .filter(|&&j| j != ip && j != ic && j != inext)
            .any(|&j| point_in_triangle(&p, &c, &n, &points[j]));
        if blocked {
            continue;
        }

        best_diff = diff;
        best_position = Some(i);
        best_corner = [ip, ic, inext];
    }

    best_position
        .map(|position| (position, best_corner))
        .ok_or(GeometryError::NoEarFound { remaining: len })
}

/// Angle at `current` swept from `current → previous` to `current → next`, in `[0, 2π)`.
pub fn corner_angle(
    previous: &Point2<Real>,
    current: &Point2<Real>,
    next: &Point2<Real>,
) -> Result<Real, GeometryError> {
    (previous - current).sweep_to(&(next - current))
}

/// `true` if `p1` and `p2` lie on the same side of line `ab` (or on it).
pub fn same_side(a: &Point2<Real>, b: &Point2<Real>, p1: &Point2<Real>, p2: &Point2<Real>) -> bool {
    let edge = b - a;
    let c1 = edge.cross_2d(&(p1 - a));
    let c2 = edge.cross_2d(&(p2 - a));
    c1 * c2 >= 0.0
}

/// `true` if `p` lies inside triangle `abc` or on its boundary.
pub fn point_in_triangle(
    a: &Point2<Real>,
    b: &Point2<Real>,
    c: &Point2<Real>,
    p: &Point2<Real>,
) -> bool {
    same_side(a, b, c, p) && same_side(b, c, a, p) && same_side(c, a, b, p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::FRAC_PI_2;

    #[test]
    fn convex_corner_is_below_pi_on_clockwise_walk() {
        // clockwise walk: (0,1) -> (0,0) -> (1,0)
        let angle = corner_angle(
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(0.0, 1.0),
        )
        .unwrap();
        assert!((angle - FRAC_PI_2).abs() < 1e-6);

        let reflex = corner_angle(
            &Point2::new(0.0, 1.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
        )
        .unwrap();
        assert!((reflex - 3.0 * FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn containment_includes_boundary() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(2.0, 0.0);
        let c = Point2::new(0.0, 2.0);
        assert!(point_in_triangle(&a, &b, &c, &Point2::new(0.5, 0.5)));
        assert!(point_in_triangle(&a, &b, &c, &Point2::new(1.0, 0.0)));
        assert!(!point_in_triangle(&a, &b, &c, &Point2::new(1.5, 1.5)));
    }

    #[test]
    fn single_triangle_ccw() {
        let outline = Outline::from_coords(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        let tris = triangulate(&outline).unwrap();
        assert_eq!(tris.triangles, vec![[1, 0, 2]]);
    }

    #[test]
    fn single_triangle_cw() {
        let outline = Outline::from_coords(&[[0.0, 0.0], [0.0, 1.0], [1.0, 0.0]]);
        let tris = triangulate(&outline).unwrap();
        assert_eq!(tris.triangles, vec![[1, 0, 2]]);
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let outline = Outline::from_coords(&[[0.0, 0.0], [0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(triangulate(&outline), Err(GeometryError::ZeroLengthVector));
    }
}
