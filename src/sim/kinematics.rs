//! Player velocity and position integration
//!
//! Friction is applied only while no direction is held; holding a direction
//! accelerates freely up to the optional speed cap.

use super::input::InputState;
use super::state::PlayerState;

/// Advance the player by one tick
pub fn tick(player: &mut PlayerState, input: InputState, ground_y: f32) {
    let motion = player.motion;

    if input.left {
        player.vel_x -= motion.acceleration;
    }
    if input.right {
        player.vel_x += motion.acceleration;
    }
    if input.is_idle() {
        player.vel_x *= motion.friction;
    }

    if let Some(max_speed) = motion.max_speed {
        player.vel_x = player.vel_x.clamp(-max_speed, max_speed);
    }

    // Snap to rest instead of drifting asymptotically
    if player.vel_x.abs() < motion.rest_threshold {
        player.vel_x = 0.0;
    }

    player.pos.x += player.vel_x / motion.ticks_per_second;

    // Keep the sprite standing on the ground line
    if player.bottom() > ground_y {
        player.pos.y = ground_y - player.size.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    const RIGHT: InputState = InputState {
        left: false,
        right: true,
    };
    const LEFT: InputState = InputState {
        left: true,
        right: false,
    };
    const IDLE: InputState = InputState {
        left: false,
        right: false,
    };

    fn player() -> PlayerState {
        PlayerState::new(&Tuning::default())
    }

    #[test]
    fn test_single_tick_right() {
        let mut p = player();
        tick(&mut p, RIGHT, 300.0);
        assert_eq!(p.vel_x, 25.0);
        assert!((p.pos.x - (400.0 + 25.0 / 60.0)).abs() < 1e-4);
    }

    #[test]
    fn test_left_accelerates_negative() {
        let mut p = player();
        tick(&mut p, LEFT, 300.0);
        tick(&mut p, LEFT, 300.0);
        assert_eq!(p.vel_x, -50.0);
        assert!(p.pos.x < 400.0);
    }

    #[test]
    fn test_both_held_cancels_without_friction() {
        let mut p = player();
        p.vel_x = 300.0;
        let both = InputState {
            left: true,
            right: true,
        };
        tick(&mut p, both, 300.0);
        assert_eq!(p.vel_x, 300.0);
    }

    #[test]
    fn test_speed_caps_at_max() {
        let mut p = player();
        for _ in 0..200 {
            tick(&mut p, RIGHT, 300.0);
        }
        assert_eq!(p.vel_x, 1500.0);

        for _ in 0..400 {
            tick(&mut p, LEFT, 300.0);
        }
        assert_eq!(p.vel_x, -1500.0);
    }

    #[test]
    fn test_unbounded_without_cap() {
        let mut p = player();
        p.motion.max_speed = None;
        for _ in 0..200 {
            tick(&mut p, RIGHT, 300.0);
        }
        assert_eq!(p.vel_x, 5000.0);
    }

    #[test]
    fn test_friction_decays_geometrically_then_snaps() {
        let mut p = player();
        p.vel_x = 1000.0;

        let mut expected = 1000.0f32;
        for _ in 0..10 {
            tick(&mut p, IDLE, 300.0);
            expected *= 0.93;
            assert!((p.vel_x - expected).abs() < 1e-2);
        }

        for _ in 0..200 {
            tick(&mut p, IDLE, 300.0);
        }
        assert_eq!(p.vel_x, 0.0);
    }

    #[test]
    fn test_small_velocity_snaps_to_rest() {
        let mut p = player();
        p.vel_x = 0.1;
        tick(&mut p, IDLE, 300.0);
        assert_eq!(p.vel_x, 0.0);
        assert_eq!(p.pos.x, 400.0);
    }

    #[test]
    fn test_ground_clamp() {
        let mut p = player();
        p.pos.y = 290.0;
        tick(&mut p, IDLE, 300.0);
        assert_eq!(p.pos.y, 240.0);

        // Above the ground line is left alone
        p.pos.y = 100.0;
        tick(&mut p, IDLE, 300.0);
        assert_eq!(p.pos.y, 100.0);
    }

    proptest! {
        #[test]
        fn prop_right_held_is_monotonic(start in -1500.0f32..1500.0, ticks in 1usize..200) {
            let mut p = player();
            p.vel_x = start;
            let mut prev = p.vel_x;
            for _ in 0..ticks {
                tick(&mut p, RIGHT, 300.0);
                prop_assert!(p.vel_x >= prev);
                prop_assert!(p.vel_x <= 1500.0);
                prev = p.vel_x;
            }
        }

        #[test]
        fn prop_idle_never_gains_speed(start in -1500.0f32..1500.0, ticks in 1usize..300) {
            let mut p = player();
            p.vel_x = start;
            for _ in 0..ticks {
                let before = p.vel_x.abs();
                tick(&mut p, IDLE, 300.0);
                prop_assert!(p.vel_x.abs() <= before);
                prop_assert!(p.vel_x == 0.0 || p.vel_x.abs() >= 0.1);
            }
        }
    }
}
