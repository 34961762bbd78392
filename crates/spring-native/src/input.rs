use glam::Vec2;
use spring_core::{FrameInput, HEIGHT, WIDTH};

/// Latest pointer sample, in layout units.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub pos: Vec2,
    pub down: bool,
}

impl PointerState {
    pub fn frame_input(&self, dt: f32) -> FrameInput {
        FrameInput {
            pointer: self.pos,
            button_down: self.down,
            dt,
        }
    }
}

/// Map a physical-pixel window position into layout units.
///
/// The scene is stretched over the whole surface, so this only rescales.
#[inline]
pub fn window_to_layout(px: Vec2, window_px: Vec2) -> Vec2 {
    if window_px.x <= 0.0 || window_px.y <= 0.0 {
        return px;
    }
    Vec2::new(px.x * WIDTH / window_px.x, px.y * HEIGHT / window_px.y)
}

/// Frame time handed to the integrator. Negative or NaN clocks give zero.
#[inline]
pub fn clamp_frame_dt(dt: f32, max: f32) -> f32 {
    if dt.is_nan() {
        return 0.0;
    }
    dt.clamp(0.0, max)
}
