//! Tilt Ball - a ball rolling around a rectangular arena under device tilt
//!
//! Core modules:
//! - `sim`: Physics kernel (integration, wall collisions, per-frame stepping)
//! - `feed`: Synthetic tilt feed for headless hosts
//! - `clock`: Monotonic nanosecond clocks for the host loop
//! - `settings`: Data-driven host configuration

pub mod clock;
pub mod feed;
pub mod settings;
pub mod sim;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use feed::TiltFeed;
pub use settings::Settings;

/// Kernel and host configuration constants
pub mod consts {
    /// Coefficient of restitution: fraction of speed kept after a wall bounce
    pub const COR: f32 = 0.7;
    /// Nanoseconds per second (sample timestamps are in nanoseconds)
    pub const NANOS_PER_SEC: f32 = 1_000_000_000.0;

    /// Ball sprite edge length in pixels
    pub const BALL_SIZE: f32 = 128.0;

    /// Default arena dimensions (a portrait phone screen)
    pub const DEFAULT_ARENA_WIDTH: f32 = 1080.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 1920.0;

    /// Standard gravity, the largest magnitude a resting device reports
    pub const STANDARD_GRAVITY: f32 = 9.806_65;
}
