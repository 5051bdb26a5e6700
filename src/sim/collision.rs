//! Wall collision response for the rectangular arena
//!
//! Each axis is checked on its own with an if / else-if, so one call can hit
//! at most one wall per axis. A corner hit damps both velocity components in
//! the same call; there is no combined-impact correction.

use serde::{Deserialize, Serialize};

use super::state::{ArenaBounds, Particle};
use crate::consts::COR;

/// An arena wall, named from the arena's own frame (y grows upward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Bottom,
    Top,
}

/// Walls struck during a single `resolve` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Impacts {
    pub x: Option<Wall>,
    pub y: Option<Wall>,
}

impl Impacts {
    /// Whether any wall was hit
    pub fn any(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }

    /// Both axes bounced in the same call
    pub fn is_corner(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }
}

/// Clamp one axis to `[-bound, bound]`, reversing and damping its velocity
///
/// Returns `Some(true)` for the positive wall, `Some(false)` for the negative
/// one, `None` when the position was already inside.
#[inline]
fn bounce_axis(pos: &mut f32, vel: &mut f32, bound: f32) -> Option<bool> {
    if *pos > bound {
        *pos = bound;
        *vel = -*vel * COR;
        Some(true)
    } else if *pos < -bound {
        *pos = -bound;
        *vel = -*vel * COR;
        Some(false)
    } else {
        None
    }
}

/// Keep the ball inside `bounds`, bouncing it off any wall it crossed
pub fn resolve(particle: &mut Particle, bounds: &ArenaBounds) -> Impacts {
    let x = bounce_axis(&mut particle.pos.x, &mut particle.vel.x, bounds.horizontal)
        .map(|positive| if positive { Wall::Right } else { Wall::Left });
    let y = bounce_axis(&mut particle.pos.y, &mut particle.vel.y, bounds.vertical)
        .map(|positive| if positive { Wall::Top } else { Wall::Bottom });

    let impacts = Impacts { x, y };
    if impacts.any() {
        log::debug!(
            "Bounce {:?}/{:?} -> pos ({:.1}, {:.1}) vel ({:.2}, {:.2})",
            impacts.x,
            impacts.y,
            particle.pos.x,
            particle.pos.y,
            particle.vel.x,
            particle.vel.y
        );
    }
    impacts
}
