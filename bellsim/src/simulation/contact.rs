//! Discrete events: the stay collision and the clapper strike.
//!
//! Both are applied to already-integrated values. The stay reflects the bell
//! elastically; the strike pins the clapper to the rim, shares momentum between
//! the two bodies, and raises `ding` once per contact episode.

use tracing::debug;

use super::states::{BellGeometry, BellState};

/// Fraction of speed kept when the bell bounces off the stay
pub const RESTITUTION: f64 = 0.7;

/// Rebound speed above which a stay collision counts as a hard hit
pub const HARD_HIT_SPEED: f64 = 1.0;

/// How far inside the clapper limit the clapper must swing to re-arm the ding
pub const DING_HYSTERESIS: f64 = 0.1;

/// Strike volume per unit of relative impact speed
pub const VOLUME_SCALE: f64 = 0.2;

/// Bell angle and velocity just after bouncing off the stay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StayImpact {
    pub angle: f64,
    pub velocity: f64,
}

impl StayImpact {
    pub fn is_hard(&self) -> bool {
        self.velocity.abs() > HARD_HIT_SPEED
    }
}

/// Reflect an angle that went past the stay back about the limit.
/// Returns `None` while the bell is inside `[-(pi + stay), pi + stay]`.
pub fn stay_collision(geo: &BellGeometry, angle: f64, velocity: f64) -> Option<StayImpact> {
    let limit = geo.stay_limit();
    let bound = if angle > limit {
        limit
    } else if angle < -limit {
        -limit
    } else {
        return None;
    };

    Some(StayImpact {
        angle: 2.0 * bound - angle,
        velocity: -RESTITUTION * velocity,
    })
}

/// Clamp the clapper to the rim when it swings past the limit and update the
/// ding bookkeeping. `time` is recorded as `ding_time` when a strike fires.
pub fn resolve_strike(state: &mut BellState, time: f64) {
    let geo = &state.geometry;
    let limit = geo.clapper_limit;
    let relative = state.clapper_angle - state.angle;

    if relative.abs() > limit {
        if state.ding_reset {
            state.volume_ref = VOLUME_SCALE * (state.clapper_velocity - state.velocity).abs();
        }
        // perfectly inelastic: both bodies leave with the mass-weighted speed
        let common = (geo.m1 * state.velocity + geo.m2 * state.clapper_velocity) / (geo.m1 + geo.m2);
        state.velocity = common;
        state.clapper_velocity = common;
        state.clapper_angle = state.angle + limit.copysign(relative);
        state.onedge = true;
    } else {
        state.onedge = false;
    }

    if state.onedge && state.ding_reset {
        state.ding = true;
        state.ding_reset = false;
        state.ding_time = time;
        debug!(time, volume = state.volume_ref, "ding");
    } else {
        state.ding = false;
    }

    if (state.clapper_angle - state.angle).abs() < limit - DING_HYSTERESIS {
        state.ding_reset = true;
    }
}
