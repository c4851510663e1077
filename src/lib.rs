//! Endless Sprint - A side-scrolling sprint along an endless platform
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, camera, world streaming)
//! - `game`: Frame driver tying input, simulation and rendering together
//! - `renderer`: WebGPU rendering pipeline
//! - `hud`: Speed/distance readout
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod game;
pub mod hud;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod viewport;

pub use error::{ConfigError, Result};
pub use game::{FrameRenderer, Game};
pub use hud::HudReadout;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Design resolution the scene is authored against
    pub const DESIGN_WIDTH: f32 = 800.0;
    pub const DESIGN_HEIGHT: f32 = 400.0;

    /// Simulation ticks per second (one tick per display refresh)
    pub const TICKS_PER_SECOND: f32 = 60.0;

    /// Fraction of the window the scaled game container may fill
    pub const DISPLAY_SCALE_PADDING: f32 = 0.9;
}
