//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::Point2;
use polybevel::{
    Outline, Triangulation,
    float_types::{Real, TAU},
    outline::OutlineGenerator,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Absolute tolerance for area and coordinate comparisons.
pub const EPSILON: Real = 1e-9;

/// Approximate equality with an absolute tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Signed shoelace area of a closed point loop, positive when counter-clockwise.
pub fn shoelace(points: &[Point2<Real>]) -> Real {
    let n = points.len();
    let mut twice = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        twice += a.x * b.y - b.x * a.y;
    }
    twice / 2.0
}

/// Signed area of every triangle of `triangulation`, resolved against `outline`.
pub fn triangle_areas(outline: &Outline, triangulation: &Triangulation) -> Vec<Real> {
    triangulation
        .resolve(outline)
        .unwrap()
        .iter()
        .map(|corners| shoelace(corners))
        .collect()
}

/// Sum of the unsigned triangle areas.
pub fn abs_area_sum(outline: &Outline, triangulation: &Triangulation) -> Real {
    triangle_areas(outline, triangulation).iter().map(|a| a.abs()).sum()
}

/// A regular outline: no jitter, default radius.
pub fn regular_outline(divisions: usize, depth: usize) -> Outline {
    let mut rng = StdRng::seed_from_u64(0);
    OutlineGenerator::new(divisions, depth)
        .with_jitter(0.0)
        .generate(&mut rng)
        .unwrap()
}

/// A jittered outline from a fixed seed.
pub fn seeded_outline(divisions: usize, depth: usize, seed: u64) -> Outline {
    let mut rng = StdRng::seed_from_u64(seed);
    OutlineGenerator::new(divisions, depth).generate(&mut rng).unwrap()
}

/// Polar angle of `p` in degrees, normalized to `[0, 360)`.
pub fn angle_degrees(p: &Point2<Real>) -> Real {
    p.y.atan2(p.x).rem_euclid(TAU).to_degrees()
}

/// An axis-aligned unit square, counter-clockwise.
pub fn unit_square() -> Outline {
    Outline::from_coords(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])
}

/// A non-convex "L" shape, counter-clockwise.
pub fn l_shape() -> Outline {
    Outline::from_coords(&[
        [0.0, 0.0],
        [2.0, 0.0],
        [2.0, 1.0],
        [1.0, 1.0],
        [1.0, 2.0],
        [0.0, 2.0],
    ])
}
