// Front-end tuning constants: window text, palette and frame pacing.

pub const WINDOW_TITLE: &str = "Mass on Spring - Simulation";
pub const INSTRUCTIONS: &str = "Drag the Object. Release to start the Simulation.";

// Palette (0..1; the clear color is RGB as wgpu wants f64)
pub const BACKGROUND: [f64; 3] = [0.0, 0.0, 0.0];
pub const LINE_COLOR: [f32; 4] = [200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0]; // light gray
pub const MASS_COLOR: [f32; 4] = [130.0 / 255.0, 130.0 / 255.0, 130.0 / 255.0, 1.0]; // gray
pub const MASS_HIGHLIGHT_COLOR: [f32; 4] = [190.0 / 255.0, 33.0 / 255.0, 55.0 / 255.0, 1.0]; // maroon

// Frame pacing
pub const MAX_FRAME_DT: f32 = 0.1; // longest step handed to the integrator (seconds)
pub const FPS_REFRESH_SEC: f32 = 0.5; // how often the title's FPS figure updates

// Vertex budget: ground + mass + spring, six vertices per quad
pub const MAX_SCENE_VERTICES: usize = 6 * (2 + spring_core::SPRING_NUM);
