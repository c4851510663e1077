//! Fixed per-frame simulation step
//!
//! Order is fixed: kinematics, camera, generation ahead, eviction behind.

use super::input::InputState;
use super::state::GameState;
use super::{camera, kinematics};

/// Advance the game state by one tick using this frame's input snapshot
pub fn tick(state: &mut GameState, input: InputState) {
    state.time_ticks += 1;

    let tuning = &state.tuning;
    kinematics::tick(&mut state.player, input, tuning.ground_y());
    camera::update(
        &mut state.camera,
        &state.player,
        tuning.viewport_width,
        tuning.look_ahead,
    );
    state
        .world
        .ensure_ahead(&state.camera, tuning.viewport_width, &mut state.rng);
    state.world.prune_behind(&state.camera, state.player.pos.x);
}
