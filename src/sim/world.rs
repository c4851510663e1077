//! Endless ground streaming
//!
//! The world is a contiguous run of equal-width segments. New segments are
//! appended in bursts ahead of the camera and old ones are dropped from the
//! head once they fall far enough behind it.

use std::collections::VecDeque;

use rand::Rng;

use super::state::{CameraState, Segment, SegmentShade};
use crate::tuning::Tuning;

/// Streaming parameters copied out of the tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub segment_width: f32,
    pub segment_height: f32,
    pub spawn_margin: f32,
    pub spawn_batch: u32,
    pub cull_margin: f32,
}

impl Layout {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            segment_width: tuning.segment_width,
            segment_height: tuning.segment_height,
            spawn_margin: tuning.spawn_margin,
            spawn_batch: tuning.spawn_batch,
            cull_margin: tuning.cull_margin,
        }
    }
}

/// Ordered, contiguous, never-empty sequence of ground segments.
///
/// Only `generate` builds one, so `first` and `last` always exist.
#[derive(Debug, Clone)]
pub struct World {
    layout: Layout,
    segments: VecDeque<Segment>,
}

impl World {
    /// Lay down the starting run of segments
    pub fn generate<R: Rng>(tuning: &Tuning, rng: &mut R) -> Self {
        let layout = Layout::from_tuning(tuning);
        let count = tuning.initial_segment_count.max(1) as usize;
        let start_x = tuning.initial_segment_index as f32 * layout.segment_width;

        let mut world = Self {
            layout,
            segments: VecDeque::with_capacity(count),
        };
        let head = world.new_segment(start_x, rng);
        world.segments.push_back(head);
        world.extend(count - 1, rng);
        world
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// A generated world is never empty
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn first(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn last(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    /// Segment lying under world x, if any
    pub fn segment_at(&self, x: f32) -> Option<&Segment> {
        self.segments.iter().find(|s| s.contains_x(x))
    }

    /// Each segment starts exactly where the previous one ends
    pub fn is_contiguous(&self) -> bool {
        self.segments
            .iter()
            .zip(self.segments.iter().skip(1))
            .all(|(a, b)| b.start_x == a.start_x + a.width)
    }

    /// Append a burst of segments if the tail is about to scroll into view.
    ///
    /// Returns the number of segments appended.
    pub fn ensure_ahead<R: Rng>(
        &mut self,
        camera: &CameraState,
        viewport_width: f32,
        rng: &mut R,
    ) -> usize {
        if camera.to_screen(self.last().start_x) >= viewport_width + self.layout.spawn_margin {
            return 0;
        }

        let batch = self.layout.spawn_batch as usize;
        self.extend(batch, rng);

        log::debug!(
            "Generated {} segments up to x={}",
            batch,
            self.last().end_x()
        );
        batch
    }

    /// Drop head segments that are far behind the camera.
    ///
    /// Never removes the segment under `anchor_x` (or anything after it) and
    /// never empties the world, whatever the cull margin. Returns the number
    /// of segments removed.
    pub fn prune_behind(&mut self, camera: &CameraState, anchor_x: f32) -> usize {
        let mut evicted = 0;
        while self.segments.len() > 1 {
            let head = self.segments[0];
            let far_behind = camera.to_screen(head.start_x) <= -self.layout.cull_margin;
            if !far_behind || head.end_x() > anchor_x {
                break;
            }
            self.segments.pop_front();
            evicted += 1;
        }

        if evicted > 0 {
            log::debug!(
                "Pruned {} segments, world now starts at x={}",
                evicted,
                self.first().start_x
            );
        }
        evicted
    }

    /// Chain `n` segments onto the tail, each starting at the previous end
    fn extend<R: Rng>(&mut self, n: usize, rng: &mut R) {
        for _ in 0..n {
            let start_x = self.last().end_x();
            let segment = self.new_segment(start_x, rng);
            self.segments.push_back(segment);
        }
    }

    fn new_segment<R: Rng>(&self, start_x: f32, rng: &mut R) -> Segment {
        Segment {
            start_x,
            width: self.layout.segment_width,
            height: self.layout.segment_height,
            shade: random_shade(rng),
        }
    }
}

fn random_shade<R: Rng>(rng: &mut R) -> SegmentShade {
    SegmentShade::ALL[rng.random_range(0..SegmentShade::ALL.len())]
}
