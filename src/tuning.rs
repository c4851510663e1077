//! Game balance and layout constants
//!
//! Everything the simulation and HUD need to know about speeds, sizes and
//! margins lives here. Defaults reproduce the shipped game; a JSON document
//! can override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::{DESIGN_HEIGHT, DESIGN_WIDTH, TICKS_PER_SECOND};
use crate::error::{ConfigError, Result};

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Spawn position (top-left corner of the sprite)
    pub player_start_x: f32,
    pub player_start_y: f32,
    pub player_width: f32,
    pub player_height: f32,

    // === Motion ===
    /// Velocity gained per tick while a direction is held
    pub acceleration: f32,
    /// Velocity multiplier per idle tick (0-1)
    pub friction: f32,
    /// Speed cap in units/sec (`None` = unbounded)
    pub max_speed: Option<f32>,
    /// Speeds below this snap to rest
    pub rest_threshold: f32,
    /// Converts velocity (units/sec) into per-tick displacement
    pub ticks_per_second: f32,

    // === Camera ===
    /// Anticipatory scroll per unit of velocity
    pub look_ahead: f32,

    // === World ===
    pub segment_width: f32,
    pub segment_height: f32,
    /// Index of the first segment laid down at startup (may be negative)
    pub initial_segment_index: i32,
    pub initial_segment_count: u32,
    /// Generate more ground once the tail gets this close past the screen edge
    pub spawn_margin: f32,
    /// Segments appended per generation burst
    pub spawn_batch: u32,
    /// Segments this far behind the camera are evicted
    pub cull_margin: f32,

    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === HUD ===
    /// Speed that fills the speed bar completely
    pub max_display_speed: f32,
    /// Ascending tier boundaries (units/sec)
    pub speed_thresholds: Vec<f32>,
    /// One CSS color per tier (`speed_thresholds.len() + 1` entries)
    pub speed_colors: Vec<String>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_start_x: 400.0,
            player_start_y: 240.0,
            player_width: 40.0,
            player_height: 60.0,

            acceleration: 25.0,
            friction: 0.93,
            max_speed: Some(1500.0),
            rest_threshold: 0.1,
            ticks_per_second: TICKS_PER_SECOND,

            look_ahead: 0.1,

            segment_width: 200.0,
            segment_height: 100.0,
            initial_segment_index: -5,
            initial_segment_count: 20,
            spawn_margin: 500.0,
            spawn_batch: 5,
            cull_margin: 1000.0,

            viewport_width: DESIGN_WIDTH,
            viewport_height: DESIGN_HEIGHT,

            max_display_speed: 2000.0,
            speed_thresholds: vec![500.0, 1000.0, 1500.0],
            speed_colors: vec![
                "#00ff88".to_string(),
                "#ffcc00".to_string(),
                "#ff6600".to_string(),
                "#ff0080".to_string(),
            ],
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Y coordinate of the top of the ground strip
    pub fn ground_y(&self) -> f32 {
        self.viewport_height - self.segment_height
    }

    /// Reject anything that would let NaN or degenerate geometry into the sim
    pub fn validate(&self) -> Result<()> {
        finite("player_start_x", self.player_start_x)?;
        finite("player_start_y", self.player_start_y)?;
        positive("player_width", self.player_width)?;
        positive("player_height", self.player_height)?;

        positive("acceleration", self.acceleration)?;
        in_range("friction", self.friction, 0.0, 1.0)?;
        if let Some(max_speed) = self.max_speed {
            positive("max_speed", max_speed)?;
        }
        non_negative("rest_threshold", self.rest_threshold)?;
        positive("ticks_per_second", self.ticks_per_second)?;

        finite("look_ahead", self.look_ahead)?;

        positive("segment_width", self.segment_width)?;
        positive("segment_height", self.segment_height)?;
        positive("initial_segment_count", self.initial_segment_count as f32)?;
        self.check_initial_run()?;
        positive("spawn_batch", self.spawn_batch as f32)?;
        non_negative("spawn_margin", self.spawn_margin)?;
        non_negative("cull_margin", self.cull_margin)?;

        positive("viewport_width", self.viewport_width)?;
        positive("viewport_height", self.viewport_height)?;
        if self.segment_height > self.viewport_height {
            return Err(ConfigError::OutOfRange {
                field: "segment_height",
                min: 0.0,
                max: self.viewport_height,
                value: self.segment_height,
            });
        }

        positive("max_display_speed", self.max_display_speed)?;
        for &threshold in &self.speed_thresholds {
            finite("speed_thresholds", threshold)?;
        }
        if self.speed_thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::Unordered {
                field: "speed_thresholds",
            });
        }
        let expected = self.speed_thresholds.len() + 1;
        if self.speed_colors.len() != expected {
            return Err(ConfigError::TierColorMismatch {
                thresholds: self.speed_thresholds.len(),
                expected,
                got: self.speed_colors.len(),
            });
        }

        Ok(())
    }

    /// Segment indices and both ends of the starting run must be representable
    fn check_initial_run(&self) -> Result<()> {
        let index = self.initial_segment_index;
        let count = self.initial_segment_count;
        let fits = i32::try_from(count)
            .ok()
            .and_then(|count| index.checked_add(count))
            .is_some_and(|end| {
                (index as f32 * self.segment_width).is_finite()
                    && (end as f32 * self.segment_width).is_finite()
            });

        if fits {
            Ok(())
        } else {
            Err(ConfigError::InitialRun { index, count })
        }
    }
}

fn finite(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    in_range(field, value, 0.0, f32::MAX)
}

fn in_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<()> {
    finite(field, value)?;
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}
