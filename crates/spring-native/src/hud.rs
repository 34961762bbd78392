// Status text. The window title stands in for the on-screen title, FPS
// counter and `Current State:` line.

use crate::constants::WINDOW_TITLE;
use spring_core::Mode;

pub fn status_title(mode: Mode, fps: u32) -> String {
    format!("{WINDOW_TITLE} | Current State: {mode} | {fps} FPS")
}

/// Averages frames over a refresh window.
#[derive(Debug, Default)]
pub struct FpsCounter {
    frames: u32,
    elapsed: f32,
    fps: u32,
}

impl FpsCounter {
    /// Returns the new figure when a refresh window completes.
    pub fn tick(&mut self, dt: f32, refresh_sec: f32) -> Option<u32> {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed < refresh_sec || self.elapsed <= 0.0 {
            return None;
        }
        self.fps = (self.frames as f32 / self.elapsed).round() as u32;
        self.frames = 0;
        self.elapsed = 0.0;
        Some(self.fps)
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
