//! Pipeline parameters.

use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::outline::OutlineGenerator;
use crate::outline::generator::DEFAULT_RADIUS;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Everything [`Shape::generate`](crate::Shape::generate) needs to go from a
/// seed to a bevelled solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeConfig {
    /// Corner count of every star in the outline; must be even and non-zero.
    pub divisions: usize,
    /// Recursion depth of the outline generator.
    pub depth: usize,
    /// Radius of the outermost star.
    pub radius: Real,
    /// Scale on the corner jitter; `0.0` gives a regular pattern.
    pub jitter: Real,
    /// Distance between the front and back caps.
    pub thickness: Real,
    /// Number of ring steps in the rounded side wall.
    pub bevel_rings: usize,
    /// Seed for the jitter; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        ShapeConfig {
            divisions: 6,
            depth: 3,
            radius: DEFAULT_RADIUS,
            jitter: 1.0,
            thickness: 0.05,
            bevel_rings: 6,
            seed: None,
        }
    }
}

impl ShapeConfig {
    pub const fn with_divisions(mut self, divisions: usize) -> Self {
        self.divisions = divisions;
        self
    }

    pub const fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub const fn with_radius(mut self, radius: Real) -> Self {
        self.radius = radius;
        self
    }

    pub const fn with_jitter(mut self, jitter: Real) -> Self {
        self.jitter = jitter;
        self
    }

    pub const fn with_thickness(mut self, thickness: Real) -> Self {
        self.thickness = thickness;
        self
    }

    pub const fn with_bevel_rings(mut self, bevel_rings: usize) -> Self {
        self.bevel_rings = bevel_rings;
        self
    }

    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every argument before any work is done.
    pub fn validate(&self) -> Result<(), GeometryError> {
        self.outline_generator().validate()?;
        if !(self.thickness > 0.0 && self.thickness.is_finite()) {
            return Err(GeometryError::NonPositiveThickness(self.thickness));
        }
        if self.bevel_rings == 0 {
            return Err(GeometryError::ZeroBevelRings);
        }
        Ok(())
    }

    /// The outline stage of this configuration.
    pub fn outline_generator(&self) -> OutlineGenerator {
        OutlineGenerator::new(self.divisions, self.depth)
            .with_radius(self.radius)
            .with_jitter(self.jitter)
    }

    /// A fresh generator: seeded when `seed` is set, from entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use rand::Rng;

    #[test]
    fn defaults() {
        let config = ShapeConfig::default();
        assert_eq!(config.divisions, 6);
        assert_eq!(config.depth, 3);
        assert_eq!(config.bevel_rings, 6);
        assert_eq!(config.thickness, 0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_reports_invalid_arguments() {
        for config in [
            ShapeConfig::default().with_divisions(5),
            ShapeConfig::default().with_divisions(0),
            ShapeConfig::default().with_thickness(0.0),
            ShapeConfig::default().with_thickness(Real::NAN),
            ShapeConfig::default().with_bevel_rings(0),
            ShapeConfig::default().with_jitter(Real::INFINITY),
            ShapeConfig::default().with_jitter(Real::NAN),
            ShapeConfig::default().with_radius(Real::NAN),
        ] {
            let err = config.validate().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{config:?}");
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = ShapeConfig::default().with_seed(42);
        let a: u64 = config.rng().gen_range(0..u64::MAX);
        let b: u64 = config.rng().gen_range(0..u64::MAX);
        assert_eq!(a, b);
    }
}
