//! Synthetic acceleration feed for headless hosts
//!
//! Stands in for the device sensor. Only the newest due sample is handed
//! out per poll, matching the kernel's latest-only sample slot.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::STANDARD_GRAVITY;
use crate::sim::{AccelerationSample, Timestamp};

/// Deterministic stand-in for a device accelerometer
///
/// Produces a slowly rotating tilt with a little sensor noise, stamped at a
/// fixed sensor interval. Seeded so demo runs are reproducible.
#[derive(Debug, Clone)]
pub struct TiltFeed {
    rng: Pcg32,
    /// Peak planar acceleration (m/s²)
    magnitude: f32,
    /// Tilt direction rotation rate (radians/sec)
    sweep_rate: f32,
    /// Uniform noise amplitude added to each planar axis
    noise: f32,
    interval_nanos: i64,
    /// Next due capture time; `None` once the time base is exhausted
    next_nanos: Option<i64>,
}

impl TiltFeed {
    pub fn new(seed: u64, magnitude: f32, sweep_rate: f32, noise: f32, interval_nanos: i64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            magnitude: magnitude.clamp(0.0, STANDARD_GRAVITY),
            sweep_rate,
            noise: noise.abs(),
            interval_nanos: interval_nanos.max(1),
            next_nanos: Some(0),
        }
    }

    /// Start delivering from `start_nanos` on the host clock
    pub fn start_at(&mut self, start_nanos: i64) {
        self.next_nanos = Some(start_nanos);
    }

    /// Newest sample due at or before `now_nanos`
    ///
    /// Overdue capture times in between are skipped, not generated.
    pub fn poll(&mut self, now_nanos: i64) -> Option<AccelerationSample> {
        let next = self.next_nanos?;
        if next > now_nanos {
            return None;
        }

        let missed = now_nanos.checked_sub(next).map_or(0, |gap| gap / self.interval_nanos);
        let due = next.saturating_add(missed.saturating_mul(self.interval_nanos));
        self.next_nanos = due.checked_add(self.interval_nanos);
        if self.next_nanos.is_none() {
            log::warn!("Tilt feed reached the end of the clock range");
        }
        Some(self.sample_at(due))
    }

    fn sample_at(&mut self, nanos: i64) -> AccelerationSample {
        let t = nanos as f64 / 1e9;
        let angle = (t * self.sweep_rate as f64) as f32;
        let tilt = Vec2::from_angle(angle) * self.magnitude;
        let jitter = if self.noise > 0.0 {
            Vec2::new(
                self.rng.random_range(-self.noise..=self.noise),
                self.rng.random_range(-self.noise..=self.noise),
            )
        } else {
            Vec2::ZERO
        };
        let planar = tilt + jitter;
        // Whatever gravity is not tilting the device shows up on z
        let az = (STANDARD_GRAVITY.powi(2) - tilt.length_squared()).max(0.0).sqrt();

        AccelerationSample::new(planar.x, planar.y, az, Timestamp::At(nanos))
    }
}
