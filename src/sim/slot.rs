//! Latest-sample slot between the sensor callback and the render loop
//!
//! The sensor side only ever overwrites the slot; the frame reads whatever
//! is there. Samples that arrive between two frames are dropped.

use super::state::{AccelerationSample, Timestamp};

/// Holds the most recent sample handed over by the sensor feed
#[derive(Debug, Clone, Default)]
pub struct SampleSlot {
    latest: AccelerationSample,
}

impl SampleSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored sample (no queueing)
    pub fn store(&mut self, sample: AccelerationSample) {
        self.latest = sample;
    }

    /// Latest sample, reused as-is until the feed delivers another
    pub fn latest(&self) -> AccelerationSample {
        self.latest
    }

    /// Mark the stored sample as paused so the gap is never integrated
    pub fn invalidate(&mut self) {
        self.latest.timestamp = Timestamp::Paused;
    }
}
