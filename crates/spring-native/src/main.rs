use std::time::Instant;

use anyhow::Context;
use glam::Vec2;
use spring_core::{Controller, CursorHint, PhysicsParams, HEIGHT, WIDTH};
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    window::{CursorIcon, WindowBuilder},
};

mod app;
mod constants;
mod hud;
mod input;
mod render;
mod shapes;

use app::App;
use constants::{INSTRUCTIONS, WINDOW_TITLE};
use render::GpuState;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        log::error!("startup error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let controller =
        Controller::new(PhysicsParams::default()).context("invalid physical parameters")?;
    let mut app = App::new(controller);

    let event_loop = EventLoop::new().context("event loop")?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(WIDTH as f64, HEIGHT as f64))
        .with_resizable(false)
        .build(&event_loop)
        .context("window")?;

    let mut gpu = pollster::block_on(GpuState::new(&window)).context("gpu")?;
    log::info!("{INSTRUCTIONS}");
    let mut last_frame = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => {
                log::info!("closing in {} mode", app.context().mode);
                elwt.exit();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let size = gpu.window.inner_size();
                app.pointer.pos = input::window_to_layout(
                    Vec2::new(position.x as f32, position.y as f32),
                    Vec2::new(size.width as f32, size.height as f32),
                );
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => app.pointer.down = state == ElementState::Pressed,
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = (now - last_frame).as_secs_f32();
            last_frame = now;

            let update = app.advance(dt);
            if let Some(v) = update.output.velocity {
                log::trace!("[sim] x={:.2} v={:.2}", update.output.position, v);
            }
            if let Some(title) = update.title {
                gpu.window.set_title(&title);
            }
            if let Some(cursor) = update.cursor {
                gpu.window.set_cursor_icon(match cursor {
                    CursorHint::Default => CursorIcon::Default,
                    CursorHint::Grab => CursorIcon::Pointer,
                });
            }

            match gpu.render(app.vertices()) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory, exiting");
                    elwt.exit();
                }
                Err(e) => log::warn!("[gpu] frame skipped: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
