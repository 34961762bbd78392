use crate::constants::{FPS_REFRESH_SEC, MAX_FRAME_DT, MAX_SCENE_VERTICES};
use crate::hud::{status_title, FpsCounter};
use crate::input::{clamp_frame_dt, PointerState};
use crate::shapes::build_scene;
use spring_core::{Controller, CursorHint, FrameOutput, Mode, ShapeVertex, SimContext};

/// Window-side effects of one frame; `None` means unchanged.
#[derive(Debug)]
pub struct FrameUpdate {
    pub output: FrameOutput,
    pub title: Option<String>,
    pub cursor: Option<CursorHint>,
}

/// Per-window frame driver: sampled input in, scene vertices and window
/// updates out. All simulation state lives in the controller context.
pub struct App {
    controller: Controller,
    ctx: SimContext,
    pub pointer: PointerState,
    fps: FpsCounter,
    last_mode: Option<Mode>,
    last_cursor: Option<CursorHint>,
    vertices: Vec<ShapeVertex>,
}

impl App {
    pub fn new(controller: Controller) -> Self {
        let ctx = controller.initial_context();
        Self {
            controller,
            ctx,
            pointer: PointerState::default(),
            fps: FpsCounter::default(),
            last_mode: None,
            last_cursor: None,
            vertices: Vec::with_capacity(MAX_SCENE_VERTICES),
        }
    }

    pub fn context(&self) -> &SimContext {
        &self.ctx
    }

    pub fn vertices(&self) -> &[ShapeVertex] {
        &self.vertices
    }

    /// Run one frame with `raw_dt` seconds since the previous one.
    pub fn advance(&mut self, raw_dt: f32) -> FrameUpdate {
        let input = self
            .pointer
            .frame_input(clamp_frame_dt(raw_dt, MAX_FRAME_DT));
        let (ctx, output) = self.controller.update(self.ctx, &input);
        self.ctx = ctx;
        build_scene(&output, &mut self.vertices);

        let fps_changed = self.fps.tick(raw_dt.max(0.0), FPS_REFRESH_SEC).is_some();
        let mode_changed = self.last_mode != Some(output.mode);
        if mode_changed {
            log::debug!("[frame] mode -> {}", output.mode);
        }
        self.last_mode = Some(output.mode);
        let title =
            (fps_changed || mode_changed).then(|| status_title(output.mode, self.fps.fps()));

        let cursor = (self.last_cursor != Some(output.cursor)).then_some(output.cursor);
        self.last_cursor = Some(output.cursor);

        FrameUpdate {
            output,
            title,
            cursor,
        }
    }
}
