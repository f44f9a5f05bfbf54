//! Recursive lobed outline generation.

use crate::errors::GeometryError;
use crate::float_types::{PI, Real, TAU};
use crate::outline::Outline;
use crate::vector::polar;
use log::{debug, trace};
use nalgebra::{Point2, Vector2};
use rand::Rng;

/// Radius of the outermost star used by [`generate_outline`].
pub const DEFAULT_RADIUS: Real = 1.0 / 7.0;

/// Generates closed outlines by recursive corner subdivision around a regular star.
///
/// Every lobe of a star contributes two corner points; between them sits a
/// smaller star (half the radius, centred two radii out along the lobe
/// direction) whose own lobes recurse in turn until `depth` runs out. The
/// result is one closed, non-convex outline with nested bumps.
///
/// Corner points are perturbed by `jitter` times a uniform offset in
/// `[-π/divisions/2, π/divisions/2)`, added to the unit-circle `cos`/`sin`
/// before scaling by the radius. A `jitter` of `0.0` gives an exact regular
/// pattern.
///
/// The corners of a star sit half a division (`π/divisions`) either side of
/// each lobe direction, not on it: with `divisions = 6` and a zero start
/// angle the depth-1 outline has corners at -30°, 30°, 90°, 150°, 210° and
/// 270°, and `divisions = 4` gives an axis-aligned square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineGenerator {
    /// Corner count of every star; must be even.
    pub divisions: usize,
    /// Recursion depth; `1` yields the bare `divisions`-gon.
    pub depth: usize,
    pub radius: Real,
    pub start_angle: Real,
    /// Scale applied to the jitter amplitude.
    pub jitter: Real,
}

impl Default for OutlineGenerator {
    fn default() -> Self {
        OutlineGenerator {
            divisions: 6,
            depth: 3,
            radius: DEFAULT_RADIUS,
            start_angle: 0.0,
            jitter: 1.0,
        }
    }
}

impl OutlineGenerator {
    pub fn new(divisions: usize, depth: usize) -> Self {
        OutlineGenerator {
            divisions,
            depth,
            ..Default::default()
        }
    }

    pub const fn with_radius(mut self, radius: Real) -> Self {
        self.radius = radius;
        self
    }

    pub const fn with_start_angle(mut self, start_angle: Real) -> Self {
        self.start_angle = start_angle;
        self
    }

    pub const fn with_jitter(mut self, jitter: Real) -> Self {
        self.jitter = jitter;
        self
    }

    /// Check the parameters without generating anything.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.divisions % 2 != 0 {
            return Err(GeometryError::OddDivisions(self.divisions));
        }
        if self.divisions == 0 {
            return Err(GeometryError::ZeroDivisions);
        }
        for (name, value) in [
            ("radius", self.radius),
            ("start_angle", self.start_angle),
            ("jitter", self.jitter),
        ] {
            if !value.is_finite() {
                return Err(GeometryError::NonFiniteParameter { name, value });
            }
        }
        // the jitter draw spans twice the amplitude
        if !(2.0 * self.jitter_amplitude()).is_finite() {
            return Err(GeometryError::NonFiniteParameter {
                name: "jitter",
                value: self.jitter,
            });
        }
        Ok(())
    }

    /// Largest offset a single jitter draw can add to a unit-circle coordinate.
    pub fn jitter_amplitude(&self) -> Real {
        self.jitter.abs() * PI / self.divisions as Real / 2.0
    }

    /// Generate the outline, drawing all jitter from `rng`.
    ///
    /// Points come out counter-clockwise: for each lobe the leading corner,
    /// then the child star's points, then the trailing corner. `depth == 0`
    /// gives an empty outline.
    ///
    /// ## Errors
    /// [`GeometryError::OddDivisions`], [`GeometryError::ZeroDivisions`] or
    /// [`GeometryError::NonFiniteParameter`].
    ///
    /// ## Example
    /// ```
    /// use polybevel::outline::OutlineGenerator;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let outline = OutlineGenerator::new(6, 1).with_jitter(0.0).generate(&mut rng).unwrap();
    /// assert_eq!(outline.len(), 6);
    /// ```
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Outline, GeometryError> {
        self.validate()?;
        let points = self.lobes(Point2::origin(), self.radius, self.start_angle, self.depth, rng);
        debug!(
            "generated outline: divisions={} depth={} points={}",
            self.divisions,
            self.depth,
            points.len()
        );
        Ok(Outline::new(points))
    }

    fn lobes<R: Rng + ?Sized>(
        &self,
        center: Point2<Real>,
        radius: Real,
        start_angle: Real,
        depth: usize,
        rng: &mut R,
    ) -> Vec<Point2<Real>> {
        if depth == 0 {
            return Vec::new();
        }

        let d_angle = TAU / self.divisions as Real;
        let mut points = Vec::new();
        for i in 0..self.divisions / 2 {
            let angle = i as Real * d_angle * 2.0 + start_angle;

            let next = self.corner(center, radius, angle - d_angle / 2.0, rng);
            let child_center = polar(&center, radius * 2.0, angle);
            let child = self.lobes(
                child_center,
                radius / 2.0,
                angle - PI + d_angle,
                depth - 1,
                rng,
            );
            let prev = self.corner(center, radius, angle + d_angle / 2.0, rng);

            trace!(
                "lobe {i} at depth {depth}: angle={angle:.4} child points={}",
                child.len()
            );
            points.push(next);
            points.extend(child);
            points.push(prev);
        }
        points
    }

    /// Jittered corner point; x is drawn before y.
    fn corner<R: Rng + ?Sized>(
        &self,
        center: Point2<Real>,
        radius: Real,
        angle: Real,
        rng: &mut R,
    ) -> Point2<Real> {
        let jx = self.sample_jitter(rng);
        let jy = self.sample_jitter(rng);
        center + Vector2::new(angle.cos() + jx, angle.sin() + jy) * radius
    }

    fn sample_jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> Real {
        let amplitude = self.jitter_amplitude();
        if amplitude > 0.0 {
            rng.gen_range(-amplitude..amplitude)
        } else {
            0.0
        }
    }
}

/// Generate an outline with the default radius (`1/7`), start angle and jitter.
///
/// ## Errors
/// [`GeometryError::OddDivisions`] or [`GeometryError::ZeroDivisions`].
pub fn generate_outline<R: Rng + ?Sized>(
    divisions: usize,
    depth: usize,
    rng: &mut R,
) -> Result<Outline, GeometryError> {
    OutlineGenerator::new(divisions, depth).generate(rng)
}
