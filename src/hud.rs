//! Speed/distance readout
//!
//! Pure numbers for the HUD; the DOM glue only copies them into elements.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;
use crate::tuning::Tuning;

/// Values shown by the HUD for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudReadout {
    /// Rounded absolute speed (units/sec)
    pub speed: u32,
    /// Whole units travelled
    pub distance: u64,
    /// Speed bar fill (0-100)
    pub fill_percent: f32,
    /// Index into the tuning's speed tiers
    pub tier: usize,
    /// CSS color for the speed bar
    pub color: String,
}

impl HudReadout {
    pub fn from_state(state: &GameState) -> Self {
        Self::compute(state.player.vel_x, state.camera.distance, &state.tuning)
    }

    pub fn compute(vel_x: f32, distance: f64, tuning: &Tuning) -> Self {
        // Halves round toward +inf before the sign is dropped
        let speed = (vel_x + 0.5).floor().abs() as u32;
        let fill_percent = (speed as f32 / tuning.max_display_speed * 100.0).min(100.0);
        let tier = speed_tier(speed as f32, &tuning.speed_thresholds);
        let color = tuning
            .speed_colors
            .get(tier)
            .cloned()
            .unwrap_or_default();

        Self {
            speed,
            distance: distance.max(0.0).floor() as u64,
            fill_percent,
            tier,
            color,
        }
    }
}

/// Number of thresholds the speed has reached
pub fn speed_tier(speed: f32, thresholds: &[f32]) -> usize {
    thresholds.iter().take_while(|&&t| speed >= t).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_tiers() {
        let thresholds = [500.0, 1000.0, 1500.0];
        assert_eq!(speed_tier(0.0, &thresholds), 0);
        assert_eq!(speed_tier(499.0, &thresholds), 0);
        assert_eq!(speed_tier(500.0, &thresholds), 1);
        assert_eq!(speed_tier(999.0, &thresholds), 1);
        assert_eq!(speed_tier(1000.0, &thresholds), 2);
        assert_eq!(speed_tier(1500.0, &thresholds), 3);
        assert_eq!(speed_tier(9000.0, &thresholds), 3);
        assert_eq!(speed_tier(9000.0, &[]), 0);
    }

    #[test]
    fn test_readout_values() {
        let tuning = Tuning::default();

        let hud = HudReadout::compute(-612.6, 1234.9, &tuning);
        assert_eq!(hud.speed, 613);
        assert_eq!(hud.distance, 1234);
        assert!((hud.fill_percent - 30.65).abs() < 1e-3);
        assert_eq!(hud.tier, 1);
        assert_eq!(hud.color, "#ffcc00");
    }

    #[test]
    fn test_speed_rounds_halves_up() {
        let tuning = Tuning::default();
        assert_eq!(HudReadout::compute(612.5, 0.0, &tuning).speed, 613);
        assert_eq!(HudReadout::compute(-612.5, 0.0, &tuning).speed, 612);
        assert_eq!(HudReadout::compute(-612.6, 0.0, &tuning).speed, 613);
        assert_eq!(HudReadout::compute(-0.4, 0.0, &tuning).speed, 0);
    }

    #[test]
    fn test_fill_saturates() {
        let tuning = Tuning {
            max_speed: None,
            ..Default::default()
        };
        let hud = HudReadout::compute(4000.0, 0.0, &tuning);
        assert_eq!(hud.fill_percent, 100.0);
        assert_eq!(hud.color, "#ff0080");
    }

    #[test]
    fn test_from_state_at_rest() {
        let state = GameState::new(Tuning::default(), 5).unwrap();
        let hud = HudReadout::from_state(&state);
        assert_eq!(hud.speed, 0);
        assert_eq!(hud.distance, 0);
        assert_eq!(hud.fill_percent, 0.0);
        assert_eq!(hud.color, "#00ff88");
    }
}
