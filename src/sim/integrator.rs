//! Explicit Euler integration of tilt samples
//!
//! The elapsed time is measured from the sample's capture time to the
//! caller's clock on every call, not between frames. Calling `advance`
//! repeatedly with the same stale sample therefore integrates against an
//! ever-growing `dt`.

use super::state::{AccelerationSample, Particle, Timestamp};
use crate::consts::NANOS_PER_SEC;

/// Seconds between the sample's capture and `now_nanos`
///
/// `None` when the feed is paused. A sample stamped in the future yields a
/// negative value; it is passed through unchanged.
#[inline]
pub fn elapsed_seconds(timestamp: Timestamp, now_nanos: i64) -> Option<f32> {
    timestamp
        .nanos()
        .map(|t| now_nanos.saturating_sub(t) as f32 / NANOS_PER_SEC)
}

/// Advance velocity and position from the latest sample
///
/// Device tilt axes are inverted to map onto screen motion. Position uses
/// the freshly updated velocity. Paused samples leave the particle untouched.
pub fn advance(particle: &mut Particle, sample: &AccelerationSample, now_nanos: i64) {
    let Some(dt) = elapsed_seconds(sample.timestamp, now_nanos) else {
        return;
    };

    particle.vel += -sample.planar() * dt;
    particle.pos += particle.vel * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    const T0: i64 = 5_000_000_000;
    const ONE_SEC: i64 = 1_000_000_000;

    #[test]
    fn test_paused_sample_is_noop() {
        let mut p = Particle::with_state(Vec2::new(3.0, -4.0), Vec2::new(1.5, 2.5));
        let before = p;
        let sample = AccelerationSample::new(9.0, -9.0, 1.0, Timestamp::Paused);

        advance(&mut p, &sample, T0);
        assert_eq!(p, before);
    }

    #[test]
    fn test_one_second_from_rest() {
        let mut p = Particle::new();
        let sample = AccelerationSample::new(2.5, -1.25, 9.8, Timestamp::At(T0));

        advance(&mut p, &sample, T0 + ONE_SEC);

        // Position picks up the just-updated velocity
        assert_eq!(p.vel, Vec2::new(-2.5, 1.25));
        assert_eq!(p.pos, Vec2::new(-2.5, 1.25));
    }

    #[test]
    fn test_az_is_ignored() {
        let mut a = Particle::new();
        let mut b = Particle::new();
        advance(&mut a, &AccelerationSample::new(1.0, 1.0, 0.0, Timestamp::At(T0)), T0 + ONE_SEC);
        advance(&mut b, &AccelerationSample::new(1.0, 1.0, 50.0, Timestamp::At(T0)), T0 + ONE_SEC);
        assert_eq!(a, b);
    }

    #[test]
    fn test_stale_sample_keeps_integrating() {
        let mut p = Particle::new();
        let sample = AccelerationSample::new(1.0, 0.0, 0.0, Timestamp::At(T0));

        // dt = 1s
        advance(&mut p, &sample, T0 + ONE_SEC);
        assert_eq!(p.vel.x, -1.0);
        assert_eq!(p.pos.x, -1.0);

        // Same sample, clock moved on: dt = 2s, not 1s
        advance(&mut p, &sample, T0 + 2 * ONE_SEC);
        assert_eq!(p.vel.x, -3.0);
        assert_eq!(p.pos.x, -7.0);

        // And again: dt = 3s
        advance(&mut p, &sample, T0 + 3 * ONE_SEC);
        assert_eq!(p.vel.x, -6.0);
        assert_eq!(p.pos.x, -25.0);
    }

    #[test]
    fn test_future_sample_integrates_backward() {
        let mut p = Particle::new();
        let sample = AccelerationSample::new(2.0, 0.0, 0.0, Timestamp::At(T0 + ONE_SEC));

        assert_eq!(elapsed_seconds(sample.timestamp, T0), Some(-1.0));
        advance(&mut p, &sample, T0);
        assert_eq!(p.vel.x, 2.0);
        assert_eq!(p.pos.x, -2.0);
    }

    #[test]
    fn test_same_instant_is_noop() {
        let mut p = Particle::with_state(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0));
        let before = p;
        advance(&mut p, &AccelerationSample::new(5.0, 5.0, 0.0, Timestamp::At(T0)), T0);
        assert_eq!(p, before);
    }

    #[test]
    fn test_elapsed_seconds() {
        assert_eq!(elapsed_seconds(Timestamp::Paused, T0), None);
        assert_eq!(elapsed_seconds(Timestamp::At(T0), T0 + ONE_SEC / 2), Some(0.5));
        // Extreme spans saturate rather than overflow
        assert!(elapsed_seconds(Timestamp::At(i64::MAX), i64::MIN).is_some());
    }

    proptest! {
        #[test]
        fn prop_paused_never_moves(
            px in -1000.0f32..1000.0,
            py in -1000.0f32..1000.0,
            vx in -100.0f32..100.0,
            vy in -100.0f32..100.0,
            ax in -20.0f32..20.0,
            ay in -20.0f32..20.0,
            now in any::<i64>(),
        ) {
            let mut p = Particle::with_state(Vec2::new(px, py), Vec2::new(vx, vy));
            let before = p;
            advance(&mut p, &AccelerationSample::new(ax, ay, 0.0, Timestamp::Paused), now);
            prop_assert_eq!(p, before);
        }
    }
}
