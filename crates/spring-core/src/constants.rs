// Shared layout and physics constants used by the core and the native front-end.
// Layout units are logical pixels of the fixed-size window.

// Window layout
pub const WIDTH: f32 = 900.0;
pub const HEIGHT: f32 = 600.0;
pub const GROUND_Y: f32 = HEIGHT / 2.0; // ground line spans the full width here

// Mass
pub const RECT_SIZE: f32 = 50.0; // side of the square mass
pub const GROUND_THICK: f32 = 6.0; // the mass sits half of this above the ground line

// Spring drawing
pub const SPRING_NUM: usize = 12; // zig-zag segment count
pub const SPRING_LEN: f32 = 30.0; // vertical span of one zig-zag
pub const SPRING_THICK: f32 = 2.0;
pub const SPRING_Y_OFFSET: f32 = 5.0; // lift of the lower spring row above the ground

// Physics
pub const EQUILIBRIUM_X: f32 = WIDTH / 2.0 - RECT_SIZE / 2.0; // left edge of the mass at rest
pub const START_VELOCITY: f32 = 40.0;
pub const SPRING_STIFFNESS: f32 = 50.0;
pub const OBJ_MASS: f32 = 1.0;
pub const DAMPING_COEFFICIENT: f32 = 2.0;

// Transition thresholds (compared in f64)
pub const EPSILON: f64 = 0.1; // settle: |displacement| and |velocity| both below
pub const THRESHOLD: f64 = 10.0; // release: |displacement| above starts a simulation

// Drag clamp bounds for the mass's left edge
pub const DRAG_MIN_X: f32 = RECT_SIZE;
pub const DRAG_MAX_X: f32 = WIDTH - RECT_SIZE;
