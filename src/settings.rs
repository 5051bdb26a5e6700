//! Host settings for the headless demo
//!
//! Loaded from an optional JSON file; anything missing falls back to the
//! defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{BALL_SIZE, DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH};

/// Demo host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    /// Arena width in pixels
    pub arena_width: f32,
    /// Arena height in pixels
    pub arena_height: f32,
    /// Ball sprite edge length in pixels
    pub ball_size: f32,

    // === Timing ===
    /// Render frames per second
    pub frame_rate_hz: f32,
    /// Sensor delivery interval (the platform's "normal" rate is 200 ms)
    pub sensor_interval_ms: u64,
    /// Total simulated run time
    pub duration_secs: f32,
    /// Pace frames on the wall clock instead of a simulated one
    pub realtime: bool,

    // === Synthetic feed ===
    /// RNG seed for sensor noise
    pub seed: u64,
    /// Peak planar tilt acceleration (m/s²)
    pub tilt_magnitude: f32,
    /// Tilt direction rotation rate (radians/sec)
    pub sweep_rate: f32,
    /// Sensor noise amplitude (m/s²)
    pub noise: f32,

    // === Lifecycle ===
    /// Stop the simulation this many seconds in, if set
    pub pause_at_secs: Option<f32>,
    /// How long to stay stopped before restarting
    pub pause_for_secs: f32,
    /// Log a snapshot every this many frames (0 disables)
    pub log_every_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            ball_size: BALL_SIZE,

            frame_rate_hz: 60.0,
            sensor_interval_ms: 200,
            duration_secs: 10.0,
            realtime: false,

            seed: 0x7117_ba11,
            tilt_magnitude: 4.0,
            sweep_rate: 0.6,
            noise: 0.05,

            pause_at_secs: Some(4.0),
            pause_for_secs: 2.0,
            log_every_frames: 60,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.sanitized()
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp host-side values the loop cannot run with
    ///
    /// Arena and ball sizes are passed through untouched; the kernel accepts
    /// whatever bounds it is given.
    pub fn sanitized(mut self) -> Self {
        if !(self.frame_rate_hz.is_finite() && self.frame_rate_hz > 0.0) {
            log::warn!("frame_rate_hz {} out of range, using 60", self.frame_rate_hz);
            self.frame_rate_hz = 60.0;
        }
        if self.sensor_interval_ms == 0 {
            log::warn!("sensor_interval_ms must be > 0, using 1");
            self.sensor_interval_ms = 1;
        }
        if !(self.duration_secs.is_finite() && self.duration_secs >= 0.0) {
            log::warn!("duration_secs {} out of range, using 0", self.duration_secs);
            self.duration_secs = 0.0;
        }
        self.pause_for_secs = self.pause_for_secs.max(0.0);
        self
    }

    /// Nanoseconds between render frames
    pub fn frame_interval_nanos(&self) -> i64 {
        (1e9 / self.frame_rate_hz as f64).round() as i64
    }

    pub fn sensor_interval_nanos(&self) -> i64 {
        (self.sensor_interval_ms as i64).saturating_mul(1_000_000)
    }

    /// Number of frames in the run
    pub fn total_frames(&self) -> u64 {
        (self.duration_secs * self.frame_rate_hz).round() as u64
    }
}
