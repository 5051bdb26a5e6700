//! Simulation state and input types
//!
//! The ball is the only body; samples and bounds are plain values handed in
//! by the host each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Capture time of an acceleration sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Timestamp {
    /// Monotonic capture time in nanoseconds
    At(i64),
    /// Feed was paused or has not produced a sample yet; suppresses integration
    #[default]
    Paused,
}

impl Timestamp {
    /// Map a raw sensor timestamp, treating any negative value as paused
    pub fn from_raw(nanos: i64) -> Self {
        if nanos < 0 {
            Timestamp::Paused
        } else {
            Timestamp::At(nanos)
        }
    }

    /// Nanosecond value, if the feed is live
    pub fn nanos(&self) -> Option<i64> {
        match self {
            Timestamp::At(t) => Some(*t),
            Timestamp::Paused => None,
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Timestamp::Paused)
    }
}

/// One accelerometer reading, already corrected for screen rotation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccelerationSample {
    pub ax: f32,
    pub ay: f32,
    /// Carried through from the sensor; the kernel does not read it
    pub az: f32,
    pub timestamp: Timestamp,
}

impl AccelerationSample {
    pub fn new(ax: f32, ay: f32, az: f32, timestamp: Timestamp) -> Self {
        Self {
            ax,
            ay,
            az,
            timestamp,
        }
    }

    /// Planar part of the reading used to drive the ball
    #[inline]
    pub fn planar(&self) -> Vec2 {
        Vec2::new(self.ax, self.ay)
    }
}

/// Half-extents of the arena, measured from its centre and already reduced
/// by the body radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub horizontal: f32,
    pub vertical: f32,
}

impl ArenaBounds {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Bounds for a `width` x `height` arena holding a body `body_size` across,
    /// so the whole sprite (not just its centre) stays visible
    pub fn for_arena(width: f32, height: f32, body_size: f32) -> Self {
        Self {
            horizontal: width / 2.0 - body_size / 2.0,
            vertical: height / 2.0 - body_size / 2.0,
        }
    }

    /// Whether a position lies inside the bounds (inclusive)
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x.abs() <= self.horizontal && pos.y.abs() <= self.vertical
    }
}

/// The simulated ball: a point mass offset from the arena centre
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Particle {
    /// A ball at rest in the middle of the arena
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Current speed
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}
