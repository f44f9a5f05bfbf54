//! Planar vector helpers on top of `nalgebra`.
//!
//! Addition, subtraction, uniform scaling and the dot product come straight
//! from `nalgebra::Vector2`. The pieces nalgebra does not spell the way the
//! geometry code needs them live in [`PlanarVector`].

use crate::errors::GeometryError;
use crate::float_types::{Real, TAU, tolerance};
use nalgebra::{Point2, Vector2};

/// 2D vector operations used by the outline, triangulation and bevel code.
pub trait PlanarVector: Sized {
    /// Scalar 2D cross product `x1*y2 - x2*y1`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`; doubles as a
    /// signed parallelogram area and as a turn direction.
    fn cross_2d(&self, other: &Self) -> Real;

    /// Unit vector in the same direction.
    ///
    /// ## Errors
    /// [`GeometryError::ZeroLengthVector`] if the length is within
    /// [`tolerance`] of zero.
    fn checked_normalize(&self) -> Result<Self, GeometryError>;

    /// Angle swept counter-clockwise from `self` to `other`, in `[0, 2π)`.
    ///
    /// ## Errors
    /// [`GeometryError::ZeroLengthVector`] if either vector has no length.
    fn sweep_to(&self, other: &Self) -> Result<Real, GeometryError>;
}

impl PlanarVector for Vector2<Real> {
    #[inline]
    fn cross_2d(&self, other: &Self) -> Real {
        self.x * other.y - other.x * self.y
    }

    #[inline]
    fn checked_normalize(&self) -> Result<Self, GeometryError> {
        self.try_normalize(tolerance())
            .ok_or(GeometryError::ZeroLengthVector)
    }

    fn sweep_to(&self, other: &Self) -> Result<Real, GeometryError> {
        let a = self.checked_normalize()?;
        let b = other.checked_normalize()?;
        let sin = a.cross_2d(&b);
        let cos = a.dot(&b).clamp(-1.0, 1.0);
        if sin >= 0.0 {
            Ok(cos.acos())
        } else {
            Ok(TAU - cos.acos())
        }
    }
}

/// Point on the circle of `radius` around `center` at `angle` radians.
#[inline]
pub fn polar(center: &Point2<Real>, radius: Real, angle: Real) -> Point2<Real> {
    *center + Vector2::new(angle.cos(), angle.sin()) * radius
}
