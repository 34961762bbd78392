//! Plain-old-data types shared with the GPU layer and the bundled shader.

use glam::Vec2;

use crate::constants::{HEIGHT, WIDTH};

pub static SHAPES_WGSL: &str = include_str!("../shaders/shapes.wgsl");

/// One vertex of a flat-colored triangle, position in layout pixels.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

/// Uniform block read by `vs_main`; padded to 16 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniforms {
    pub size: [f32; 2],
    pub _pad: [f32; 2],
}

impl Default for ViewUniforms {
    fn default() -> Self {
        Self {
            size: [WIDTH, HEIGHT],
            _pad: [0.0; 2],
        }
    }
}

/// CPU mirror of the shader's pixel-to-clip mapping.
#[inline]
pub fn layout_to_clip(p: Vec2, view: &ViewUniforms) -> Vec2 {
    Vec2::new(
        p.x / view.size[0] * 2.0 - 1.0,
        1.0 - p.y / view.size[1] * 2.0,
    )
}
