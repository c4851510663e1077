//! Frame driver
//!
//! `Game` owns the simulation state and the live input flags. Platform code
//! feeds it input events and calls `on_frame` once per display refresh.

use crate::error::Result;
use crate::hud::HudReadout;
use crate::sim::{GameState, InputEvent, InputState, tick};
use crate::tuning::Tuning;

/// Anything that can draw a finished frame
pub trait FrameRenderer {
    type Error;

    /// Draw the current state. Must not feed anything back into the sim.
    fn render(&mut self, state: &GameState, time_ms: f64)
    -> std::result::Result<(), Self::Error>;
}

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    input: InputState,
}

impl Game {
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self> {
        Ok(Self {
            state: GameState::new(tuning, seed)?,
            input: InputState::default(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    /// Record a press/release; takes effect on the next frame
    pub fn handle(&mut self, event: InputEvent) {
        self.input.apply(event);
    }

    /// Advance the simulation one tick without drawing
    pub fn step(&mut self) {
        // Snapshot so the whole tick sees one consistent flag pair
        let input = self.input;
        tick(&mut self.state, input);
    }

    /// Run one simulation tick, then hand the result to the renderer
    pub fn on_frame<R: FrameRenderer>(
        &mut self,
        renderer: &mut R,
        time_ms: f64,
    ) -> std::result::Result<(), R::Error> {
        self.step();
        renderer.render(&self.state, time_ms)
    }

    pub fn hud(&self) -> HudReadout {
        HudReadout::from_state(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Direction;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(u64, f32)>,
        fail: bool,
    }

    impl FrameRenderer for Recorder {
        type Error = &'static str;

        fn render(
            &mut self,
            state: &GameState,
            _time_ms: f64,
        ) -> std::result::Result<(), Self::Error> {
            self.frames.push((state.time_ticks, state.player.vel_x));
            if self.fail {
                Err("surface lost")
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_renderer_sees_ticked_state() {
        let mut game = Game::new(Tuning::default(), 1).unwrap();
        let mut recorder = Recorder::default();

        game.handle(InputEvent::Press(Direction::Right));
        game.on_frame(&mut recorder, 16.0).unwrap();
        game.on_frame(&mut recorder, 32.0).unwrap();
        game.handle(InputEvent::Release(Direction::Right));
        game.on_frame(&mut recorder, 48.0).unwrap();

        assert_eq!(recorder.frames.len(), 3);
        assert_eq!(recorder.frames[0], (1, 25.0));
        assert_eq!(recorder.frames[1], (2, 50.0));
        assert!((recorder.frames[2].1 - 50.0 * 0.93).abs() < 1e-4);
    }

    #[test]
    fn test_render_error_propagates_after_tick() {
        let mut game = Game::new(Tuning::default(), 1).unwrap();
        let mut recorder = Recorder {
            fail: true,
            ..Default::default()
        };
        assert_eq!(game.on_frame(&mut recorder, 0.0), Err("surface lost"));
        assert_eq!(game.state().time_ticks, 1);
    }

    #[test]
    fn test_hud_tracks_state() {
        let mut game = Game::new(Tuning::default(), 1).unwrap();
        let mut recorder = Recorder::default();
        game.handle(InputEvent::Press(Direction::Left));
        for _ in 0..4 {
            game.on_frame(&mut recorder, 0.0).unwrap();
        }
        let hud = game.hud();
        assert_eq!(hud.speed, 100);
        // 25 + 50 + 75 + 100 over 60
        assert_eq!(hud.distance, 4);
    }

    #[test]
    fn test_step_ticks_without_renderer() {
        let mut game = Game::new(Tuning::default(), 1).unwrap();
        game.handle(InputEvent::Press(Direction::Right));
        for _ in 0..3 {
            game.step();
        }
        assert_eq!(game.state().time_ticks, 3);
        assert_eq!(game.hud().speed, 75);
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let tuning = Tuning {
            friction: -0.5,
            ..Default::default()
        };
        assert!(Game::new(tuning, 1).is_err());
    }
}
