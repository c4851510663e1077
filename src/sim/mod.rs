//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Input read once per tick
//! - No rendering or platform dependencies

pub mod camera;
pub mod input;
pub mod kinematics;
pub mod state;
pub mod tick;
pub mod world;

pub use input::{Direction, InputEvent, InputState};
pub use state::{CameraState, GameState, Motion, PlayerState, Segment, SegmentShade};
pub use tick::tick;
pub use world::{Layout, World};
