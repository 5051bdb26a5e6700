//! Ball physics kernel
//!
//! Everything that moves the ball lives here. The module is pure:
//! - Time comes in as explicit nanosecond arguments
//! - State is an owned `Particle` passed by `&mut`
//! - No rendering or platform dependencies

pub mod collision;
pub mod frame;
pub mod integrator;
pub mod slot;
pub mod state;

pub use collision::{Impacts, Wall, resolve};
pub use frame::{SimSnapshot, Simulation, step};
pub use integrator::{advance, elapsed_seconds};
pub use slot::SampleSlot;
pub use state::{AccelerationSample, ArenaBounds, Particle, Timestamp};
