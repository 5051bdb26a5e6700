//! Tilt Ball entry point
//!
//! Headless host: drives the per-frame contract against a synthetic tilt
//! feed, logging the ball as it goes. Runs on a simulated clock by default,
//! or paced by the wall clock when `realtime` is set.
//!
//! Usage: `tilt-ball [settings.json]`

use std::path::PathBuf;

use tilt_ball::sim::Simulation;
use tilt_ball::{Clock, ManualClock, MonotonicClock, Settings, TiltFeed};

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tilt Ball (headless) starting...");

    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load_from(&path),
        None => Settings::default(),
    };

    let snapshot = if settings.realtime {
        log::info!("Pacing frames on the wall clock");
        run(&settings, &MonotonicClock::new())
    } else {
        run(&settings, &ManualClock::new(0))
    };
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode final snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Embedders drive `Simulation` directly; there is no headless loop on wasm
}

/// Run the whole session and return its final state
fn run<C: Clock>(settings: &Settings, clock: &C) -> tilt_ball::sim::SimSnapshot {
    let frame_nanos = settings.frame_interval_nanos();
    let origin = clock.now_nanos();
    let pause_start = settings
        .pause_at_secs
        .map(|s| origin.saturating_add((s as f64 * 1e9) as i64));
    let pause_end = pause_start.map(|t| t.saturating_add((settings.pause_for_secs as f64 * 1e9) as i64));

    let mut sim = Simulation::new(settings.arena_width, settings.arena_height, settings.ball_size);
    let mut feed = TiltFeed::new(
        settings.seed,
        settings.tilt_magnitude,
        settings.sweep_rate,
        settings.noise,
        settings.sensor_interval_nanos(),
    );
    sim.start();
    feed.start_at(clock.now_nanos());

    let mut next_frame = origin;
    for _ in 0..settings.total_frames() {
        next_frame = next_frame.saturating_add(frame_nanos);
        clock.wait_until(next_frame);
        let now = clock.now_nanos();

        let in_pause = match (pause_start, pause_end) {
            (Some(start), Some(end)) => now >= start && now < end,
            _ => false,
        };
        if in_pause && sim.is_running() {
            sim.stop();
        } else if !in_pause && !sim.is_running() {
            sim.start();
            // The feed restarts fresh, like a re-registered listener
            feed.start_at(now);
        }

        // Sensor callbacks fire before the frame; only the newest survives
        if let Some(sample) = feed.poll(now) {
            sim.on_sample(sample);
        }

        let impacts = sim.frame(now);
        if impacts.is_corner() {
            log::info!("Corner bounce at frame {}", sim.frame_count());
        }

        if settings.log_every_frames > 0 && sim.frame_count() % settings.log_every_frames == 0 {
            let pos = sim.position();
            let origin = sim.sprite_origin();
            log::info!(
                "frame {:>5}: pos ({:>8.2}, {:>8.2}) sprite ({:>7.1}, {:>7.1}) speed {:.2}",
                sim.frame_count(),
                pos.x,
                pos.y,
                origin.x,
                origin.y,
                sim.particle().speed()
            );
        }
    }

    log::info!(
        "Finished {} frames with {} bounce frames",
        sim.frame_count(),
        sim.bounce_count()
    );
    sim.snapshot()
}
