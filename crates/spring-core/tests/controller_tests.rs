// Host-side tests for the interaction state machine.

use glam::Vec2;
use spring_core::{
    mass_rect, step, Controller, CursorHint, FrameInput, MassTint, Mode, OscillatorState,
    PhysicsParams, SimContext, DRAG_MAX_X, DRAG_MIN_X, WIDTH,
};

const DT: f32 = 1.0 / 60.0;

fn controller() -> Controller {
    Controller::new(PhysicsParams::default()).expect("default params are valid")
}

/// Idle context with the mass at rest at `position`.
fn idle_at(position: f32) -> SimContext {
    SimContext {
        mode: Mode::Idle,
        dragging: false,
        oscillator: OscillatorState::new(position, 0.0),
    }
}

fn center_of(position: f32) -> Vec2 {
    let r = mass_rect(position);
    r.min + r.size * 0.5
}

fn input(pointer: Vec2, button_down: bool) -> FrameInput {
    FrameInput {
        pointer,
        button_down,
        dt: DT,
    }
}

#[test]
fn starts_idle_at_equilibrium_with_launch_velocity() {
    let c = controller();
    let ctx = c.initial_context();
    assert_eq!(ctx.mode, Mode::Idle);
    assert!(!ctx.dragging);
    assert_eq!(ctx.oscillator.position, c.params().equilibrium);
    assert_eq!(ctx.oscillator.velocity, c.params().start_velocity);
}

#[test]
fn idle_without_input_stays_put() {
    let c = controller();
    let ctx = c.initial_context();
    let (next, out) = c.update(ctx, &input(Vec2::new(5.0, 5.0), false));
    assert_eq!(next, ctx);
    assert_eq!(out.mode, Mode::Idle);
    assert_eq!(out.position, ctx.oscillator.position);
    assert_eq!(out.velocity, None);
    assert_eq!(out.tint, MassTint::Normal);
    assert_eq!(out.cursor, CursorHint::Default);
}

#[test]
fn hover_highlights_without_grabbing() {
    let c = controller();
    let eq = c.params().equilibrium;
    let (next, out) = c.update(idle_at(eq), &input(center_of(eq), false));
    assert!(!next.dragging);
    assert_eq!(out.tint, MassTint::Highlighted);
    assert_eq!(out.cursor, CursorHint::Grab);
}

#[test]
fn press_inside_grabs_and_release_far_starts_simulation() {
    let c = controller();
    let eq = c.params().equilibrium;

    // Press on the mass.
    let (ctx, _) = c.update(idle_at(eq), &input(center_of(eq), true));
    assert!(ctx.dragging);
    assert_eq!(ctx.mode, Mode::Idle);

    // Drag 150 units to the right.
    let target = Vec2::new(eq + 150.0, center_of(eq).y);
    let (ctx, out) = c.update(ctx, &input(target, true));
    assert!(ctx.dragging);
    assert_eq!(ctx.mode, Mode::Idle);
    assert_eq!(out.position, eq + 150.0);

    // Release.
    let (ctx, out) = c.update(ctx, &input(target, false));
    assert!(!ctx.dragging);
    assert_eq!(ctx.mode, Mode::Simulating);
    assert_eq!(out.mode, Mode::Simulating);
    assert_eq!(out.position, eq + 150.0);
}

#[test]
fn release_near_equilibrium_stays_idle() {
    let c = controller();
    let eq = c.params().equilibrium;

    let (ctx, _) = c.update(idle_at(eq), &input(center_of(eq), true));
    let near = Vec2::new(eq + 8.0, center_of(eq).y);
    let (ctx, _) = c.update(ctx, &input(near, true));
    assert_eq!(ctx.oscillator.position, eq + 8.0);

    let (ctx, out) = c.update(ctx, &input(near, false));
    assert!(!ctx.dragging);
    assert_eq!(ctx.mode, Mode::Idle);
    assert_eq!(out.mode, Mode::Idle);

    // And it keeps staying idle on later frames.
    let (ctx, _) = c.update(ctx, &input(near, false));
    assert_eq!(ctx.mode, Mode::Idle);
}

#[test]
fn press_outside_does_not_grab() {
    let c = controller();
    let eq = c.params().equilibrium;
    let away = Vec2::new(20.0, 20.0);
    let (ctx, out) = c.update(idle_at(eq), &input(away, true));
    assert!(!ctx.dragging);
    assert_eq!(ctx.oscillator.position, eq);
    assert_eq!(out.tint, MassTint::Normal);
}

#[test]
fn grab_holds_after_pointer_leaves_region() {
    let c = controller();
    let eq = c.params().equilibrium;
    let (ctx, _) = c.update(idle_at(eq), &input(center_of(eq), true));
    assert!(ctx.dragging);

    // Pointer moves well above the mass, button still held.
    let off = Vec2::new(eq + 60.0, 10.0);
    let (ctx, out) = c.update(ctx, &input(off, true));
    assert!(ctx.dragging);
    assert_eq!(ctx.oscillator.position, eq + 60.0);
    assert_eq!(out.tint, MassTint::Highlighted);
    assert_eq!(out.cursor, CursorHint::Grab);
}

#[test]
fn dragging_clamps_to_screen_margins() {
    let c = controller();
    let eq = c.params().equilibrium;
    let y = center_of(eq).y;

    for (x, expected) in [
        (-500.0, DRAG_MIN_X),
        (0.0, DRAG_MIN_X),
        (DRAG_MIN_X - 0.5, DRAG_MIN_X),
        (WIDTH + 300.0, DRAG_MAX_X),
        (DRAG_MAX_X + 0.25, DRAG_MAX_X),
    ] {
        let (ctx, _) = c.update(idle_at(eq), &input(center_of(eq), true));
        let (ctx, out) = c.update(ctx, &input(Vec2::new(x, y), true));
        assert_eq!(ctx.oscillator.position, expected, "pointer x {x}");
        assert_eq!(out.position, expected);
    }
}

#[test]
fn dragging_does_not_touch_velocity() {
    let c = controller();
    let eq = c.params().equilibrium;
    let ctx = c.initial_context();
    let (ctx, _) = c.update(ctx, &input(center_of(eq), true));
    let (ctx, _) = c.update(ctx, &input(Vec2::new(eq - 200.0, 0.0), true));
    assert_eq!(ctx.oscillator.velocity, c.params().start_velocity);
}

#[test]
fn released_mass_far_from_equilibrium_starts_simulating_without_drag() {
    let c = controller();
    let eq = c.params().equilibrium;
    let (ctx, _) = c.update(idle_at(eq - 50.0), &input(Vec2::ZERO, false));
    assert_eq!(ctx.mode, Mode::Simulating);
}

#[test]
fn simulating_steps_physics_each_frame() {
    let c = controller();
    let eq = c.params().equilibrium;
    let mut ctx = idle_at(eq + 100.0);
    ctx.mode = Mode::Simulating;

    let (next, out) = c.update(ctx, &input(Vec2::ZERO, false));
    let expected = step(c.params(), ctx.oscillator, DT);
    assert_eq!(next.oscillator, expected);
    assert_eq!(next.mode, Mode::Simulating);
    assert_eq!(out.position, expected.position);
    assert_eq!(out.velocity, Some(expected.velocity));
    assert_eq!(out.tint, MassTint::Highlighted);
}

#[test]
fn drag_input_is_ignored_while_simulating() {
    let c = controller();
    let eq = c.params().equilibrium;
    let mut ctx = idle_at(eq + 100.0);
    ctx.mode = Mode::Simulating;

    let grab = input(center_of(eq + 100.0), true);
    let (next, out) = c.update(ctx, &grab);
    assert!(!next.dragging);
    assert_eq!(next.mode, Mode::Simulating);
    assert_eq!(next.oscillator, step(c.params(), ctx.oscillator, DT));
    assert_eq!(out.cursor, CursorHint::Default);
}

#[test]
fn settle_check_runs_before_step() {
    let c = controller();
    let eq = c.params().equilibrium;
    let settled = OscillatorState::new(eq + 0.05, 0.05);
    let ctx = SimContext {
        mode: Mode::Simulating,
        dragging: false,
        oscillator: settled,
    };

    let (next, out) = c.update(ctx, &input(Vec2::ZERO, false));
    assert_eq!(next.mode, Mode::Idle);
    // The settling frame reports the pre-step values.
    assert_eq!(next.oscillator, settled);
    assert_eq!(out.position, settled.position);
    assert_eq!(out.velocity, Some(settled.velocity));
    assert_eq!(out.mode, Mode::Idle);
}

#[test]
fn settled_system_stays_idle_until_next_release() {
    let c = controller();
    let eq = c.params().equilibrium;
    let mut ctx = idle_at(eq + 200.0);
    ctx.mode = Mode::Simulating;

    let mut frames = 0;
    while ctx.mode == Mode::Simulating {
        let (next, _) = c.update(ctx, &input(Vec2::ZERO, false));
        ctx = next;
        frames += 1;
        assert!(frames < 10_000, "simulation never settled");
    }
    let rest = ctx;

    for _ in 0..100 {
        let (next, out) = c.update(ctx, &input(Vec2::ZERO, false));
        assert_eq!(next, rest);
        assert_eq!(out.mode, Mode::Idle);
        ctx = next;
    }
}

#[test]
fn full_cycle_drag_release_settle() {
    let c = controller();
    let eq = c.params().equilibrium;
    let y = center_of(eq).y;
    let mut ctx = c.initial_context();

    let (next, _) = c.update(ctx, &input(center_of(eq), true));
    ctx = next;
    let (next, _) = c.update(ctx, &input(Vec2::new(150.0, y), true));
    ctx = next;
    let (next, _) = c.update(ctx, &input(Vec2::new(150.0, y), false));
    ctx = next;
    assert_eq!(ctx.mode, Mode::Simulating);

    let mut frames = 0;
    while ctx.mode == Mode::Simulating {
        let (next, out) = c.update(ctx, &input(Vec2::new(150.0, y), false));
        assert!(out.position.is_finite());
        ctx = next;
        frames += 1;
        assert!(frames < 10_000);
    }
    assert!((ctx.oscillator.position - eq).abs() < 0.1);
    assert!(ctx.oscillator.velocity.abs() < 0.1);
}

#[test]
fn invalid_params_are_rejected_at_construction() {
    let bad = PhysicsParams {
        mass: 0.0,
        ..PhysicsParams::default()
    };
    assert!(Controller::new(bad).is_err());
}

#[test]
fn mode_display_matches_status_text() {
    assert_eq!(Mode::Idle.to_string(), "Idle");
    assert_eq!(Mode::Simulating.to_string(), "Simulation");
}
