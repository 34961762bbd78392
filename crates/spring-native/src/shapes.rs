use crate::constants::{LINE_COLOR, MASS_COLOR, MASS_HIGHLIGHT_COLOR};
use glam::Vec2;
use spring_core::{
    ground_line, mass_rect, spring_segments, FrameOutput, MassTint, Rect, Segment, ShapeVertex,
};

#[inline]
fn vertex(p: Vec2, color: [f32; 4]) -> ShapeVertex {
    ShapeVertex {
        pos: p.to_array(),
        color,
    }
}

/// Two triangles covering the rectangle.
pub fn push_rect(out: &mut Vec<ShapeVertex>, rect: &Rect, color: [f32; 4]) {
    let min = rect.min;
    let max = rect.max();
    let tr = Vec2::new(max.x, min.y);
    let bl = Vec2::new(min.x, max.y);
    out.extend_from_slice(&[
        vertex(min, color),
        vertex(tr, color),
        vertex(max, color),
        vertex(min, color),
        vertex(max, color),
        vertex(bl, color),
    ]);
}

/// A stroke as a quad extruded by half the thickness on each side.
pub fn push_segment(out: &mut Vec<ShapeVertex>, seg: &Segment, color: [f32; 4]) {
    let dir = (seg.end - seg.start).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let n = dir.perp() * (seg.thickness * 0.5);
    out.extend_from_slice(&[
        vertex(seg.start + n, color),
        vertex(seg.start - n, color),
        vertex(seg.end - n, color),
        vertex(seg.start + n, color),
        vertex(seg.end - n, color),
        vertex(seg.end + n, color),
    ]);
}

pub fn mass_color(tint: MassTint) -> [f32; 4] {
    match tint {
        MassTint::Normal => MASS_COLOR,
        MassTint::Highlighted => MASS_HIGHLIGHT_COLOR,
    }
}

/// Ground, then the mass, then the spring on top.
pub fn build_scene(frame: &FrameOutput, out: &mut Vec<ShapeVertex>) {
    out.clear();
    push_segment(out, &ground_line(), LINE_COLOR);
    push_rect(out, &mass_rect(frame.position), mass_color(frame.tint));
    for seg in spring_segments(frame.position).iter() {
        push_segment(out, seg, LINE_COLOR);
    }
}
