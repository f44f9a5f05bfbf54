//! Closed 2D outlines and the recursive lobed outline generator.

use crate::float_types::Real;
use geo::{Area, BoundingRect, Coord, LineString, Polygon as GeoPolygon, Rect};
use nalgebra::Point2;

pub mod generator;

pub use generator::{OutlineGenerator, generate_outline};

/// Traversal direction of an [`Outline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Zero signed area; the outline has no interior to speak of.
    Degenerate,
}

impl Winding {
    /// `1.0` for counter-clockwise, `-1.0` for clockwise and `0.0` otherwise.
    pub const fn sign(self) -> Real {
        match self {
            Winding::CounterClockwise => 1.0,
            Winding::Clockwise => -1.0,
            Winding::Degenerate => 0.0,
        }
    }
}

/// An ordered, implicitly closed sequence of points.
///
/// The last point connects back to the first; the closing point is never
/// repeated. An outline is immutable once built, and anything derived from it
/// (a [`Triangulation`](crate::triangulate::Triangulation), a
/// [`Mesh3D`](crate::mesh::Mesh3D)) refers to its points by index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    points: Vec<Point2<Real>>,
}

impl Outline {
    pub const fn new(points: Vec<Point2<Real>>) -> Self {
        Outline { points }
    }

    /// Build an outline from `[x, y]` pairs.
    pub fn from_coords(coords: &[[Real; 2]]) -> Self {
        Outline::new(coords.iter().map(|&[x, y]| Point2::new(x, y)).collect())
    }

    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consume the outline and return its points.
    pub fn into_points(self) -> Vec<Point2<Real>> {
        self.points
    }

    /// `(previous, next)` neighbours of point `i`, wrapping around the ends.
    pub fn neighbors(&self, i: usize) -> (Point2<Real>, Point2<Real>) {
        let n = self.points.len();
        let prev = self.points[(i + n - 1) % n];
        let next = self.points[(i + 1) % n];
        (prev, next)
    }

    /// Signed shoelace area; positive for counter-clockwise outlines.
    pub fn signed_area(&self) -> Real {
        if self.points.len() < 3 {
            return 0.0;
        }
        self.to_geo().signed_area()
    }

    /// Traversal direction, read off the sign of [`Outline::signed_area`].
    pub fn winding(&self) -> Winding {
        let area = self.signed_area();
        if area > 0.0 {
            Winding::CounterClockwise
        } else if area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }

    /// Axis-aligned bounds of the outline, `None` when it has no points.
    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        self.to_geo().bounding_rect()
    }

    /// Same outline with the traversal direction reversed.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Outline { points }
    }

    /// `true` if every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
    }

    /// Convert to a `geo::Polygon` (exterior ring only, closed by geo).
    pub fn to_geo(&self) -> GeoPolygon<Real> {
        let ring: LineString<Real> = self
            .points
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();
        GeoPolygon::new(ring, vec![])
    }
}

impl From<Vec<Point2<Real>>> for Outline {
    fn from(points: Vec<Point2<Real>>) -> Self {
        Outline::new(points)
    }
}

impl From<&GeoPolygon<Real>> for Outline {
    /// Takes the exterior ring, dropping geo's explicit closing coordinate.
    fn from(polygon: &GeoPolygon<Real>) -> Self {
        let mut points: Vec<Point2<Real>> = polygon
            .exterior()
            .coords()
            .map(|c| Point2::new(c.x, c.y))
            .collect();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        Outline { points }
    }
}
