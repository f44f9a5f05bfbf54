//! Struct and functions for working with the `Vertex`s a [`Mesh3D`](super::Mesh3D) hands to a renderer.

use crate::float_types::Real;
use bytemuck::{Pod, Zeroable};
use nalgebra::{Point2, Point3, Vector3};

/// A mesh vertex, holding position, normal and texture coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
    pub uv: Point2<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`    – the position in model space
    /// * `normal` – (optionally non‑unit) normal; it is **copied verbatim**
    /// * `uv`     – texture coordinate
    pub const fn new(pos: Point3<Real>, normal: Vector3<Real>, uv: Point2<Real>) -> Self {
        Vertex { pos, normal, uv }
    }

    /// Flip vertex normal
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Pack into the `f32` layout GPUs expect.
    #[allow(clippy::unnecessary_cast)]
    pub fn to_gpu(&self) -> GpuVertex {
        GpuVertex {
            position: [self.pos.x as f32, self.pos.y as f32, self.pos.z as f32],
            normal: [self.normal.x as f32, self.normal.y as f32, self.normal.z as f32],
            uv: [self.uv.x as f32, self.uv.y as f32],
        }
    }
}

/// Interleaved position/normal/uv vertex, castable to bytes with `bytemuck`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl GpuVertex {
    /// Byte stride of one vertex.
    pub const STRIDE: usize = std::mem::size_of::<GpuVertex>();
}
