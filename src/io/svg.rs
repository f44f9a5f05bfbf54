//! The 2D "canvas painter": an outline and its triangulation drawn as SVG.

use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::io::IoError;
use crate::outline::Outline;
use crate::triangulate::Triangulation;
use nalgebra::Point2;
use ::svg::Document;
use ::svg::node::element::path::Data;
use ::svg::node::element::{Circle, Path, Rectangle};

/// Draws outlines onto a square canvas of `size` pixels.
///
/// Outline space is centred on the canvas with `+y` pointing up, so
/// `(x, y)` lands on pixel `(x·size + size/2, -y·size + size/2)`.
/// Elements are emitted in drawing order: the outline stroke, one dot per
/// outline point in outline order, then the triangles in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasPainter {
    pub size: Real,
    pub background: String,
    pub stroke: String,
    pub triangle_stroke: String,
    pub triangle_fill: String,
    pub point_radius: Real,
    pub opacity: Real,
}

impl Default for CanvasPainter {
    fn default() -> Self {
        CanvasPainter {
            size: 600.0,
            background: "black".to_string(),
            stroke: "white".to_string(),
            triangle_stroke: "red".to_string(),
            triangle_fill: "blue".to_string(),
            point_radius: 5.0,
            opacity: 0.3,
        }
    }
}

impl CanvasPainter {
    pub fn new(size: Real) -> Self {
        CanvasPainter {
            size,
            ..Default::default()
        }
    }

    /// Map an outline coordinate to canvas pixels.
    pub fn to_canvas(&self, p: &Point2<Real>) -> Point2<Real> {
        let half = self.size / 2.0;
        Point2::new(p.x * self.size + half, -p.y * self.size + half)
    }

    #[allow(clippy::unnecessary_cast)]
    fn closed_path(&self, points: &[Point2<Real>]) -> Data {
        let mut data = Data::new();
        for (i, p) in points.iter().enumerate() {
            let c = self.to_canvas(p);
            let xy = (c.x as f32, c.y as f32);
            data = if i == 0 { data.move_to(xy) } else { data.line_to(xy) };
        }
        data.close()
    }

    /// Render `outline` and, when given, its `triangulation`.
    ///
    /// ## Errors
    /// [`GeometryError::IndexOutOfRange`] if a triangle does not fit the outline.
    #[allow(clippy::unnecessary_cast)]
    pub fn paint(
        &self,
        outline: &Outline,
        triangulation: Option<&Triangulation>,
    ) -> Result<Document, GeometryError> {
        let size = self.size as f32;
        let mut document = Document::new()
            .set("viewBox", (0.0, 0.0, size, size))
            .set("width", size)
            .set("height", size)
            .add(
                Rectangle::new()
                    .set("width", size)
                    .set("height", size)
                    .set("fill", self.background.as_str()),
            );

        if outline.is_empty() {
            return Ok(document);
        }

        document = document.add(
            Path::new()
                .set("fill", "none")
                .set("stroke", self.stroke.as_str())
                .set("stroke-width", 3)
                .set("opacity", self.opacity as f32)
                .set("d", self.closed_path(outline.points())),
        );

        for p in outline.points() {
            let c = self.to_canvas(p);
            document = document.add(
                Circle::new()
                    .set("cx", c.x as f32)
                    .set("cy", c.y as f32)
                    .set("r", self.point_radius as f32)
                    .set("fill", self.stroke.as_str()),
            );
        }

        if let Some(triangulation) = triangulation {
            for corners in triangulation.resolve(outline)? {
                document = document.add(
                    Path::new()
                        .set("fill", self.triangle_fill.as_str())
                        .set("stroke", self.triangle_stroke.as_str())
                        .set("stroke-width", 1)
                        .set("opacity", self.opacity as f32)
                        .set("d", self.closed_path(&corners)),
                );
            }
        }

        Ok(document)
    }

    /// [`CanvasPainter::paint`] serialized to an SVG string.
    pub fn paint_to_string(
        &self,
        outline: &Outline,
        triangulation: Option<&Triangulation>,
    ) -> Result<String, GeometryError> {
        Ok(self.paint(outline, triangulation)?.to_string())
    }

    /// Paint and write the SVG file at `path`.
    pub fn save<P: AsRef<std::path::Path>>(
        &self,
        path: P,
        outline: &Outline,
        triangulation: Option<&Triangulation>,
    ) -> Result<(), IoError> {
        let document = self.paint(outline, triangulation)?;
        ::svg::save(path, &document)?;
        Ok(())
    }
}
