// main.rs
//
// Generate one lobed solid and write it out as `out/shape.stl` plus a 2D
// drawing of its outline and triangulation as `out/shape.svg`.
//
// POLYBEVEL_SEED=<u64> fixes the first roll; RUST_LOG=debug shows each stage.

use log::{error, info, warn};
use polybevel::{ErrorKind, Shape, ShapeConfig};
use std::fs;

/// Rolls attempted before giving up on degenerate outlines.
const MAX_ROLLS: u64 = 16;

fn main() {
    env_logger::init();

    let seed = match std::env::var("POLYBEVEL_SEED") {
        Ok(value) => match value.trim().parse::<u64>() {
            Ok(seed) => seed,
            Err(err) => {
                error!("POLYBEVEL_SEED={value:?} is not a u64: {err}");
                std::process::exit(2);
            },
        },
        Err(_) => rand::random(),
    };

    let mut shape = None;
    for roll in 0..MAX_ROLLS {
        let config = ShapeConfig::default().with_seed(seed.wrapping_add(roll));
        match Shape::generate(&config) {
            Ok(generated) => {
                info!("seed {} produced a shape", seed.wrapping_add(roll));
                shape = Some(generated);
                break;
            },
            Err(err) if err.kind() == ErrorKind::DegenerateGeometry => {
                warn!("seed {} failed ({err}), rolling again", seed.wrapping_add(roll));
            },
            Err(err) => {
                error!("{err}");
                std::process::exit(1);
            },
        }
    }

    let Some(shape) = shape else {
        error!("no usable shape after {MAX_ROLLS} rolls starting at seed {seed}");
        std::process::exit(1);
    };

    let report = shape.mesh.analyze_manifold();
    println!(
        "{} outline points, {} triangles, {} mesh vertices, {} mesh triangles, manifold: {}",
        shape.outline.len(),
        shape.triangulation.len(),
        shape.mesh.vertex_count(),
        shape.mesh.triangle_count(),
        report.is_manifold
    );

    if let Err(err) = fs::create_dir_all("out") {
        error!("creating out/: {err}");
    }

    #[cfg(feature = "stl-io")]
    match shape.mesh.to_stl_binary() {
        Ok(bytes) => {
            if let Err(err) = fs::write("out/shape.stl", bytes) {
                error!("writing out/shape.stl: {err}");
            }
        },
        Err(err) => error!("STL export failed: {err}"),
    }

    #[cfg(feature = "svg-io")]
    if let Err(err) = polybevel::io::CanvasPainter::default().save(
        "out/shape.svg",
        &shape.outline,
        Some(&shape.triangulation),
    ) {
        error!("writing out/shape.svg: {err}");
    }
}
