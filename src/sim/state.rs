//! Game state and core simulation types
//!
//! One `GameState` owns everything the frame driver mutates; components get
//! the pieces they need by reference.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::world::World;
use crate::error::Result;
use crate::tuning::Tuning;

/// Ground tile palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentShade {
    Slate,
    Steel,
    Fog,
}

impl SegmentShade {
    pub const ALL: [SegmentShade; 3] = [SegmentShade::Slate, SegmentShade::Steel, SegmentShade::Fog];
}

/// One fixed-width tile of the scrolling ground
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start_x: f32,
    pub width: f32,
    pub height: f32,
    pub shade: SegmentShade,
}

impl Segment {
    /// World x where the next contiguous segment starts
    #[inline]
    pub fn end_x(&self) -> f32 {
        self.start_x + self.width
    }

    /// True if `x` lies over this tile (start inclusive, end exclusive)
    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.start_x && x < self.end_x()
    }
}

/// Motion constants carried with the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Velocity change per tick while a direction is held
    pub acceleration: f32,
    /// Per-tick velocity multiplier when idle (0-1)
    pub friction: f32,
    /// Speed cap (`None` = unbounded)
    pub max_speed: Option<f32>,
    pub rest_threshold: f32,
    pub ticks_per_second: f32,
}

/// The player sprite
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Top-left corner in world space
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity (units/sec)
    pub vel_x: f32,
    pub motion: Motion,
}

impl PlayerState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_start_x, tuning.player_start_y),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            vel_x: 0.0,
            motion: Motion {
                acceleration: tuning.acceleration,
                friction: tuning.friction,
                max_speed: tuning.max_speed,
                rest_threshold: tuning.rest_threshold,
                ticks_per_second: tuning.ticks_per_second,
            },
        }
    }

    /// Y of the sprite's bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Current speed regardless of direction
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel_x.abs()
    }
}

/// Horizontal scroll plus the odometer it feeds
#[derive(Debug, Clone, Default)]
pub struct CameraState {
    /// World x shown at the left screen edge (recomputed every tick)
    pub offset_x: f32,
    /// Total distance travelled (monotonic)
    pub distance: f64,
}

impl CameraState {
    /// Convert a world x to screen x
    #[inline]
    pub fn to_screen(&self, world_x: f32) -> f32 {
        world_x - self.offset_x
    }
}

/// Complete simulation state, owned by the frame driver
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Source for segment shades
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub player: PlayerState,
    pub world: World,
    pub camera: CameraState,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Validate the tuning and lay down the starting ground
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self> {
        tuning.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let world = World::generate(&tuning, &mut rng);
        let player = PlayerState::new(&tuning);

        log::info!(
            "World initialized: {} segments, seed {}",
            world.len(),
            seed
        );

        Ok(Self {
            seed,
            rng,
            tuning,
            player,
            world,
            camera: CameraState::default(),
            time_ticks: 0,
        })
    }
}
