//! Scene geometry derived from the mass position and the fixed layout.
//!
//! Everything here is in layout units (logical pixels, origin top-left, y
//! down). The renderer only needs these shapes plus a tint to draw a frame.

use crate::constants::{
    DRAG_MAX_X, DRAG_MIN_X, GROUND_THICK, GROUND_Y, RECT_SIZE, SPRING_LEN, SPRING_NUM,
    SPRING_THICK, SPRING_Y_OFFSET, WIDTH,
};
use glam::Vec2;

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Edges are inclusive.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }
}

/// Straight stroke between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
    pub thickness: f32,
}

/// Top edge of the mass: it rests just above the ground line.
pub const MASS_TOP_Y: f32 = GROUND_Y - RECT_SIZE - GROUND_THICK / 2.0;

/// The mass square for a given left-edge position. Also the grab region.
pub fn mass_rect(position: f32) -> Rect {
    Rect::new(position, MASS_TOP_Y, RECT_SIZE, RECT_SIZE)
}

pub fn ground_line() -> Segment {
    Segment {
        start: Vec2::new(0.0, GROUND_Y),
        end: Vec2::new(WIDTH, GROUND_Y),
        thickness: SPRING_THICK,
    }
}

/// Keep a dragged mass on screen.
#[inline]
pub fn clamp_drag_x(x: f32) -> f32 {
    x.clamp(DRAG_MIN_X, DRAG_MAX_X)
}

/// Zig-zag spring from the left window edge to the mass.
///
/// Segments alternate between the upper row (`GROUND_Y - SPRING_LEN -
/// SPRING_Y_OFFSET`) and the lower row (`GROUND_Y - SPRING_Y_OFFSET`). Each
/// full zig plus zag covers one section of `position / (SPRING_NUM / 2)`, so
/// the last segment lands on the mass's left edge.
pub fn spring_segments(position: f32) -> [Segment; SPRING_NUM] {
    let section = position / (SPRING_NUM as f32 / 2.0);
    let mut start = Vec2::new(0.0, GROUND_Y - SPRING_LEN - SPRING_Y_OFFSET);
    let mut end = Vec2::new(section / 2.0, GROUND_Y - SPRING_Y_OFFSET);

    let mut out = [Segment {
        start,
        end,
        thickness: SPRING_THICK,
    }; SPRING_NUM];
    for seg in out.iter_mut() {
        *seg = Segment {
            start,
            end,
            thickness: SPRING_THICK,
        };
        start.x += section;
        std::mem::swap(&mut start, &mut end);
    }
    out
}
