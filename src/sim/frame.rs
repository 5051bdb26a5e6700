//! Per-frame stepping and the simulation session
//!
//! The host calls `Simulation::frame` once per display refresh. Each frame
//! integrates the latest sample and immediately resolves wall collisions, in
//! that order. Nothing is scheduled internally.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Impacts, resolve};
use super::integrator::advance;
use super::slot::SampleSlot;
use super::state::{AccelerationSample, ArenaBounds, Particle};

/// Advance the particle from `sample`, then keep it inside `bounds`
pub fn step(
    particle: &mut Particle,
    sample: &AccelerationSample,
    now_nanos: i64,
    bounds: &ArenaBounds,
) -> Impacts {
    advance(particle, sample, now_nanos);
    resolve(particle, bounds)
}

/// Serializable view of a session for logs and headless output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub frame: u64,
    pub pos: Vec2,
    pub vel: Vec2,
    pub bounds: ArenaBounds,
    pub bounces: u64,
    pub paused: bool,
}

/// One ball in one arena, fed by a sensor and drawn every frame
#[derive(Debug, Clone)]
pub struct Simulation {
    particle: Particle,
    bounds: ArenaBounds,
    arena_size: Vec2,
    body_size: f32,
    slot: SampleSlot,
    running: bool,
    frame_count: u64,
    bounce_count: u64,
}

impl Simulation {
    /// New session with the ball at rest in the centre of a `width` x `height` arena
    pub fn new(width: f32, height: f32, body_size: f32) -> Self {
        let bounds = ArenaBounds::for_arena(width, height, body_size);
        log::info!(
            "Simulation created: arena {}x{}, body {}, bounds ({}, {})",
            width,
            height,
            body_size,
            bounds.horizontal,
            bounds.vertical
        );
        Self {
            particle: Particle::new(),
            bounds,
            arena_size: Vec2::new(width, height),
            body_size,
            slot: SampleSlot::new(),
            running: false,
            frame_count: 0,
            bounce_count: 0,
        }
    }

    /// Begin accepting samples from the feed
    pub fn start(&mut self) {
        self.running = true;
        log::info!("Simulation started");
    }

    /// Stop accepting samples and invalidate the stored one, so the time
    /// spent stopped is never integrated
    pub fn stop(&mut self) {
        self.running = false;
        self.slot.invalidate();
        log::info!("Simulation stopped after {} frames", self.frame_count);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Sensor callback: overwrite the latest sample
    ///
    /// Samples arriving while stopped are ignored, as an unregistered
    /// listener would never see them.
    pub fn on_sample(&mut self, sample: AccelerationSample) {
        if !self.running {
            log::trace!("Dropping sample delivered while stopped");
            return;
        }
        self.slot.store(sample);
    }

    /// Arena size changed; the new bounds apply from the next frame
    pub fn resize(&mut self, width: f32, height: f32) {
        self.arena_size = Vec2::new(width, height);
        self.bounds = ArenaBounds::for_arena(width, height, self.body_size);
        log::info!(
            "Arena resized to {}x{}, bounds ({}, {})",
            width,
            height,
            self.bounds.horizontal,
            self.bounds.vertical
        );
    }

    /// Run one render tick against the latest sample
    pub fn frame(&mut self, now_nanos: i64) -> Impacts {
        let sample = self.slot.latest();
        let impacts = step(&mut self.particle, &sample, now_nanos, &self.bounds);
        self.frame_count += 1;
        if impacts.any() {
            self.bounce_count += 1;
        }
        impacts
    }

    /// Ball offset from the arena centre
    pub fn position(&self) -> Vec2 {
        self.particle.pos
    }

    pub fn particle(&self) -> &Particle {
        &self.particle
    }

    pub fn bounds(&self) -> ArenaBounds {
        self.bounds
    }

    pub fn arena_size(&self) -> Vec2 {
        self.arena_size
    }

    /// Top-left draw position of the ball sprite in screen space
    ///
    /// Screen y grows downward while the arena's y grows upward.
    pub fn sprite_origin(&self) -> Vec2 {
        let center = self.arena_size / 2.0;
        let half = self.body_size / 2.0;
        Vec2::new(
            center.x - half + self.particle.pos.x,
            center.y - half - self.particle.pos.y,
        )
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frames in which at least one wall was hit
    pub fn bounce_count(&self) -> u64 {
        self.bounce_count
    }

    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            frame: self.frame_count,
            pos: self.particle.pos,
            vel: self.particle.vel,
            bounds: self.bounds,
            bounces: self.bounce_count,
            paused: self.slot.latest().timestamp.is_paused(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Timestamp;

    const ONE_SEC: i64 = 1_000_000_000;

    #[test]
    fn test_step_advances_then_resolves() {
        let bounds = ArenaBounds::new(1.0, 100.0);
        let mut p = Particle::new();
        let sample = AccelerationSample::new(-4.0, 0.0, 0.0, Timestamp::At(0));

        // Unclamped: vel.x = 4, pos.x = 4 -> clamped to the right wall
        let impacts = step(&mut p, &sample, ONE_SEC, &bounds);

        assert_eq!(p.pos.x, 1.0);
        assert!((p.vel.x - (-2.8)).abs() < 1e-5);
        assert_eq!(impacts.x, Some(crate::sim::Wall::Right));
        assert!(bounds.contains(p.pos));
    }

    #[test]
    fn test_no_sample_yet_stays_put() {
        let mut sim = Simulation::new(400.0, 800.0, 100.0);
        sim.start();
        for i in 0..10 {
            sim.frame(i * ONE_SEC);
        }
        assert_eq!(sim.position(), Vec2::ZERO);
        assert_eq!(sim.frame_count(), 10);
    }

    #[test]
    fn test_frame_uses_latest_sample() {
        let mut sim = Simulation::new(10_000.0, 10_000.0, 0.0);
        sim.start();
        sim.on_sample(AccelerationSample::new(100.0, 0.0, 0.0, Timestamp::At(0)));
        sim.on_sample(AccelerationSample::new(0.0, 2.0, 0.0, Timestamp::At(0)));

        sim.frame(ONE_SEC);

        assert_eq!(sim.position(), Vec2::new(0.0, -2.0));
    }

    #[test]
    fn test_stop_suppresses_integration() {
        let mut sim = Simulation::new(10_000.0, 10_000.0, 0.0);
        sim.start();
        sim.on_sample(AccelerationSample::new(1.0, 1.0, 0.0, Timestamp::At(0)));
        sim.frame(ONE_SEC);
        let moved = *sim.particle();

        sim.stop();
        // Long pause: nothing integrates, even many seconds later
        sim.frame(60 * ONE_SEC);
        assert_eq!(*sim.particle(), moved);
        assert!(sim.snapshot().paused);

        // Samples while stopped are not accepted
        sim.on_sample(AccelerationSample::new(1.0, 1.0, 0.0, Timestamp::At(61 * ONE_SEC)));
        sim.frame(62 * ONE_SEC);
        assert_eq!(*sim.particle(), moved);

        // After restart the slot stays paused until a fresh sample lands
        sim.start();
        sim.frame(63 * ONE_SEC);
        assert_eq!(*sim.particle(), moved);

        sim.on_sample(AccelerationSample::new(0.0, 0.0, 0.0, Timestamp::At(63 * ONE_SEC)));
        sim.frame(64 * ONE_SEC);
        // Zero tilt: drifts at the retained velocity for 1s
        assert_eq!(sim.position(), moved.pos + moved.vel);
    }

    #[test]
    fn test_resize_applies_next_frame() {
        let mut sim = Simulation::new(1000.0, 1000.0, 100.0);
        assert_eq!(sim.bounds(), ArenaBounds::new(450.0, 450.0));

        sim.start();
        sim.on_sample(AccelerationSample::new(-300.0, 0.0, 0.0, Timestamp::At(0)));
        sim.frame(ONE_SEC);
        assert_eq!(sim.position().x, 300.0);

        sim.resize(500.0, 1000.0);
        assert_eq!(sim.bounds(), ArenaBounds::new(200.0, 450.0));
        assert_eq!(sim.arena_size(), Vec2::new(500.0, 1000.0));

        sim.on_sample(AccelerationSample::new(0.0, 0.0, 0.0, Timestamp::At(ONE_SEC)));
        let impacts = sim.frame(ONE_SEC + 1);
        assert_eq!(sim.position().x, 200.0);
        assert!(impacts.x.is_some());
        assert_eq!(sim.bounce_count(), 1);
    }

    #[test]
    fn test_sprite_origin_flips_y() {
        let mut sim = Simulation::new(1080.0, 1920.0, 128.0);
        assert_eq!(sim.sprite_origin(), Vec2::new(476.0, 896.0));

        sim.start();
        sim.on_sample(AccelerationSample::new(-10.0, -20.0, 0.0, Timestamp::At(0)));
        sim.frame(ONE_SEC);
        assert_eq!(sim.position(), Vec2::new(10.0, 20.0));
        assert_eq!(sim.sprite_origin(), Vec2::new(486.0, 876.0));
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut sim = Simulation::new(200.0, 200.0, 20.0);
        sim.start();
        sim.on_sample(AccelerationSample::new(1.0, 0.0, 9.0, Timestamp::At(0)));
        sim.frame(ONE_SEC);

        let json = serde_json::to_string(&sim.snapshot()).unwrap();
        let back: SimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.frame, 1);
        assert_eq!(back.pos, sim.position());
        assert!(!back.paused);
    }
}
