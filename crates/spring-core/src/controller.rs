//! Interaction state machine: drag the mass while idle, simulate after release.
//!
//! The controller is pure with respect to its inputs. A [`SimContext`] carries
//! everything that changes between frames; [`Controller::update`] takes the
//! previous context plus this frame's [`FrameInput`] and returns the next
//! context together with what the renderer should draw.

use std::fmt;

use glam::Vec2;

use crate::layout::{clamp_drag_x, mass_rect};
use crate::oscillator::{self, OscillatorState};
use crate::params::{ConfigError, PhysicsParams};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Simulating,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Idle => f.write_str("Idle"),
            Mode::Simulating => f.write_str("Simulation"),
        }
    }
}

/// How the renderer should color the mass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MassTint {
    Normal,
    Highlighted,
}

/// Pointer cursor the window should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Grab,
}

/// Input sampled once per frame, in layout units and seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: Vec2,
    pub button_down: bool,
    pub dt: f32,
}

/// State carried from one frame to the next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimContext {
    pub mode: Mode,
    /// Only meaningful while idle.
    pub dragging: bool,
    pub oscillator: OscillatorState,
}

impl SimContext {
    pub fn new(params: &PhysicsParams) -> Self {
        Self {
            mode: Mode::Idle,
            dragging: false,
            oscillator: OscillatorState::initial(params),
        }
    }
}

/// What one frame hands to the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub position: f32,
    /// Present on frames processed in the simulating state.
    pub velocity: Option<f32>,
    pub mode: Mode,
    pub tint: MassTint,
    pub cursor: CursorHint,
}

#[derive(Clone, Debug)]
pub struct Controller {
    params: PhysicsParams,
}

impl Controller {
    /// Rejects bad parameters up front so the frame loop never sees them.
    pub fn new(params: PhysicsParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    pub fn initial_context(&self) -> SimContext {
        SimContext::new(&self.params)
    }

    pub fn update(&self, ctx: SimContext, input: &FrameInput) -> (SimContext, FrameOutput) {
        match ctx.mode {
            Mode::Idle => self.update_idle(ctx, input),
            Mode::Simulating => self.update_simulating(ctx, input),
        }
    }

    fn update_idle(&self, mut ctx: SimContext, input: &FrameInput) -> (SimContext, FrameOutput) {
        let hovered = mass_rect(ctx.oscillator.position).contains(input.pointer);

        if hovered && input.button_down && !ctx.dragging {
            ctx.dragging = true;
            log::info!("[drag] grab at x={:.1}", input.pointer.x);
        }
        if !input.button_down {
            ctx.dragging = false;
        }
        if ctx.dragging {
            ctx.oscillator.position = clamp_drag_x(input.pointer.x);
        }

        let (tint, cursor) = if hovered || ctx.dragging {
            (MassTint::Highlighted, CursorHint::Grab)
        } else {
            (MassTint::Normal, CursorHint::Default)
        };

        if !ctx.dragging && oscillator::is_displaced(&self.params, ctx.oscillator.position) {
            ctx.mode = Mode::Simulating;
            log::info!(
                "[sim] release at x={:.1} (displacement {:.1})",
                ctx.oscillator.position,
                oscillator::displacement(&self.params, ctx.oscillator.position)
            );
        }

        let out = FrameOutput {
            position: ctx.oscillator.position,
            velocity: None,
            mode: ctx.mode,
            tint,
            cursor,
        };
        (ctx, out)
    }

    fn update_simulating(
        &self,
        mut ctx: SimContext,
        input: &FrameInput,
    ) -> (SimContext, FrameOutput) {
        ctx.dragging = false;

        // Settle check runs on the pre-step state; the settling frame is not stepped.
        if oscillator::is_settled(&self.params, ctx.oscillator) {
            ctx.mode = Mode::Idle;
            log::info!("[sim] settled at x={:.2}", ctx.oscillator.position);
            let out = FrameOutput {
                position: ctx.oscillator.position,
                velocity: Some(ctx.oscillator.velocity),
                mode: ctx.mode,
                tint: MassTint::Highlighted,
                cursor: CursorHint::Default,
            };
            return (ctx, out);
        }

        ctx.oscillator = oscillator::step(&self.params, ctx.oscillator, input.dt);
        let out = FrameOutput {
            position: ctx.oscillator.position,
            velocity: Some(ctx.oscillator.velocity),
            mode: ctx.mode,
            tint: MassTint::Highlighted,
            cursor: CursorHint::Default,
        };
        (ctx, out)
    }
}
