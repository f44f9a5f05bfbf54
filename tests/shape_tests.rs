mod support;

use polybevel::errors::ErrorKind;
use polybevel::float_types::Real;
use polybevel::{Shape, ShapeConfig, extrude, triangulate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use support::*;

#[test]
fn default_config_produces_a_closed_solid() {
    for seed in 0..10 {
        let shape = Shape::generate(&ShapeConfig::default().with_seed(seed)).unwrap();
        assert_eq!(shape.outline.len(), 78);
        assert_eq!(shape.triangulation.len(), 76);
        assert_eq!(shape.mesh.vertex_count(), 78 * 7);
        assert!(shape.mesh.analyze_manifold().is_oriented);
    }
}

#[test]
fn same_seed_same_shape() {
    let config = ShapeConfig::default().with_seed(99);
    assert_eq!(Shape::generate(&config).unwrap(), Shape::generate(&config).unwrap());
}

#[test]
fn different_seeds_move_the_outline() {
    let a = Shape::generate(&ShapeConfig::default().with_seed(1)).unwrap();
    let b = Shape::generate(&ShapeConfig::default().with_seed(2)).unwrap();
    assert_ne!(a.outline, b.outline);
}

#[test]
fn stages_compose() {
    let config = ShapeConfig::default().with_depth(2).with_thickness(0.1).with_bevel_rings(3);
    let mut rng = StdRng::seed_from_u64(5);
    let shape = Shape::generate_with_rng(&config, &mut rng).unwrap();

    let triangulation = triangulate(&shape.outline).unwrap();
    assert_eq!(triangulation, shape.triangulation);
    let mesh = extrude(&shape.outline, &triangulation, 0.1, 3).unwrap();
    assert_eq!(mesh, shape.mesh);
}

#[test]
fn config_errors_are_invalid_arguments() {
    for config in [
        ShapeConfig::default().with_divisions(7),
        ShapeConfig::default().with_thickness(-0.5),
        ShapeConfig::default().with_bevel_rings(0),
        ShapeConfig::default().with_jitter(Real::INFINITY),
        ShapeConfig::default().with_jitter(Real::NAN),
    ] {
        let err = Shape::generate(&config.with_seed(0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn regular_shape_area_matches_front_cap() {
    let config = ShapeConfig::default().with_jitter(0.0).with_depth(2).with_seed(0);
    let shape = Shape::generate(&config).unwrap();
    let total = abs_area_sum(&shape.outline, &shape.triangulation);
    assert!(approx_eq(total, shape.outline.signed_area(), 1e-9));
}
