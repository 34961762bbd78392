pub mod constants;
pub mod controller;
pub mod gpu;
pub mod layout;
pub mod oscillator;
pub mod params;

pub use constants::*;
pub use controller::*;
pub use gpu::*;
pub use layout::*;
pub use oscillator::{OscillatorState, step};
pub use params::*;
