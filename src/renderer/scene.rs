//! Scene tessellation
//!
//! Turns a read-only view of the game state into one triangle list in
//! design-space pixels. Transient effects (glow, limb swing) are derived
//! from the current frame only.

use glam::Vec2;

use super::shapes::{circle, rect, rect_outline};
use super::vertex::{Vertex, colors};
use crate::sim::{GameState, PlayerState};

const STAR_COUNT: u32 = 50;
/// Stars scroll at this fraction of the camera speed
const STAR_PARALLAX: f32 = 0.2;
const TEXTURE_SPACING: usize = 20;
const BORDER_WIDTH: f32 = 2.0;
/// Above this speed the player glows
const GLOW_SPEED: f32 = 100.0;

/// Build the full frame for the current state
pub fn build(state: &GameState, time_ms: f64) -> Vec<Vertex> {
    let view = Vec2::new(state.tuning.viewport_width, state.tuning.viewport_height);
    let mut vertices = Vec::with_capacity(4096);

    stars(&mut vertices, state.camera.offset_x, view);
    ground(&mut vertices, state, view);
    player(&mut vertices, &state.player, state.camera.offset_x, time_ms);

    vertices
}

fn stars(out: &mut Vec<Vertex>, offset_x: f32, view: Vec2) {
    for i in 0..STAR_COUNT {
        let x = (i as f32 * 47.0 + offset_x * STAR_PARALLAX).rem_euclid(view.x);
        let y = (i as f32 * 31.0).rem_euclid(view.y);
        let size = (i % 3 + 1) as f32 * 0.5;
        out.extend(circle(Vec2::new(x, y), size, colors::STAR, 8));
    }
}

fn ground(out: &mut Vec<Vertex>, state: &GameState, view: Vec2) {
    let segment_width = state.world.layout().segment_width;

    for segment in state.world.iter() {
        let screen_x = state.camera.to_screen(segment.start_x);
        if screen_x <= -segment_width || screen_x >= view.x {
            continue;
        }
        let top = view.y - segment.height;

        out.extend(rect(
            screen_x,
            top,
            segment.width,
            segment.height,
            colors::segment(segment.shade),
        ));

        // Stripe texture along the top edge
        for dx in (0..segment.width as usize).step_by(TEXTURE_SPACING) {
            out.extend(rect(
                screen_x + dx as f32,
                top + 5.0,
                10.0,
                5.0,
                colors::SEGMENT_TEXTURE,
            ));
        }

        out.extend(rect_outline(
            screen_x,
            top,
            segment.width,
            segment.height,
            BORDER_WIDTH,
            colors::SEGMENT_BORDER,
        ));
    }
}

fn player(out: &mut Vec<Vertex>, player: &PlayerState, offset_x: f32, time_ms: f64) {
    let x = player.pos.x - offset_x;
    let y = player.pos.y;
    let (w, h) = (player.size.x, player.size.y);

    // Limbs swing faster the faster we run
    let phase = (time_ms / 100.0 * f64::from(player.speed()) * 0.01) as f32;
    let leg = phase.sin() * 15.0;
    let arm = phase.cos() * 10.0;

    out.extend(rect(x + 10.0, y + h, 8.0, 25.0 + leg, colors::PLAYER_LEGS));
    out.extend(rect(x + w - 18.0, y + h, 8.0, 25.0 - leg, colors::PLAYER_LEGS));

    out.extend(rect(x, y, w, h, colors::PLAYER_BODY));

    let head = Vec2::new(x + w / 2.0, y - 15.0);
    out.extend(circle(head, 20.0, colors::PLAYER_HEAD, 24));
    out.extend(circle(head + Vec2::new(-7.0, -3.0), 4.0, colors::PLAYER_EYES, 10));
    out.extend(circle(head + Vec2::new(7.0, -3.0), 4.0, colors::PLAYER_EYES, 10));

    out.extend(rect(x - 5.0, y + 15.0, 10.0, 25.0 + arm, colors::PLAYER_ARMS));
    out.extend(rect(x + w - 5.0, y + 15.0, 10.0, 25.0 - arm, colors::PLAYER_ARMS));

    if player.speed() > GLOW_SPEED {
        out.extend(rect(
            x - 20.0,
            y - 10.0,
            w + 40.0,
            h + 40.0,
            colors::PLAYER_GLOW,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick;
    use crate::tuning::Tuning;

    fn has_color(vertices: &[Vertex], color: [f32; 4]) -> bool {
        vertices.iter().any(|v| v.color == color)
    }

    #[test]
    fn test_stars_stay_on_screen() {
        let mut out = Vec::new();
        stars(&mut out, -12345.0, Vec2::new(800.0, 400.0));
        // Star centers are the first vertex of each fan triangle
        for v in out.iter().step_by(3) {
            assert!((0.0..800.0).contains(&v.position[0]));
            assert!((0.0..400.0).contains(&v.position[1]));
        }
    }

    #[test]
    fn test_only_visible_segments_drawn() {
        let state = GameState::new(Tuning::default(), 3).unwrap();
        let mut out = Vec::new();
        ground(&mut out, &state, Vec2::new(800.0, 400.0));

        // Camera at 0: segments starting at -200 is off, 0..600 on, 800 off
        let per_segment = 6 + 10 * 6 + 24;
        assert_eq!(out.len(), 4 * per_segment);
        assert!(out.iter().all(|v| v.position[0] >= -1.0 && v.position[0] <= 801.0));
    }

    #[test]
    fn test_glow_only_at_speed() {
        let mut state = GameState::new(Tuning::default(), 3).unwrap();
        assert!(!has_color(&build(&state, 0.0), colors::PLAYER_GLOW));

        let run = crate::sim::InputState {
            left: false,
            right: true,
        };
        for _ in 0..5 {
            tick(&mut state, run);
        }
        assert!(has_color(&build(&state, 0.0), colors::PLAYER_GLOW));
    }
}
