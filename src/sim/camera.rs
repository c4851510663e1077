//! Camera follow with velocity look-ahead

use super::state::{CameraState, PlayerState};

/// Recenter the camera on the player and advance the odometer
pub fn update(
    camera: &mut CameraState,
    player: &PlayerState,
    viewport_width: f32,
    look_ahead: f32,
) {
    camera.offset_x = player.pos.x - viewport_width / 2.0 + player.vel_x * look_ahead;
    camera.distance += f64::from(player.speed()) / f64::from(player.motion.ticks_per_second);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_offset_with_look_ahead() {
        let mut player = PlayerState::new(&Tuning::default());
        player.pos.x = 1000.0;
        player.vel_x = 600.0;

        let mut camera = CameraState::default();
        update(&mut camera, &player, 800.0, 0.1);
        assert!((camera.offset_x - 660.0).abs() < 1e-3);
    }

    #[test]
    fn test_look_ahead_leads_backwards_too() {
        let mut player = PlayerState::new(&Tuning::default());
        player.pos.x = 1000.0;
        player.vel_x = -600.0;

        let mut camera = CameraState::default();
        update(&mut camera, &player, 800.0, 0.1);
        assert!((camera.offset_x - 540.0).abs() < 1e-3);
    }

    #[test]
    fn test_distance_is_monotonic() {
        let mut player = PlayerState::new(&Tuning::default());
        let mut camera = CameraState::default();

        player.vel_x = 120.0;
        update(&mut camera, &player, 800.0, 0.1);
        assert!((camera.distance - 2.0).abs() < 1e-9);

        // Moving left still adds distance
        player.vel_x = -60.0;
        update(&mut camera, &player, 800.0, 0.1);
        assert!((camera.distance - 3.0).abs() < 1e-9);

        player.vel_x = 0.0;
        update(&mut camera, &player, 800.0, 0.1);
        assert!((camera.distance - 3.0).abs() < 1e-9);
    }
}
