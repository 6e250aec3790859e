//! Fixed-step integrator for the bell and clapper
//!
//! One call to [`timestep`] advances a [`BellState`] by `params.dt()` with
//! forward Euler (velocity first, then angle from the new velocity). The frame
//! is integrated in one of two contact modes:
//!
//! - `Free`: bell and clapper are coupled pendulums
//! - `Attached`: the clapper rests on the rim. A bell-only trial step decides
//!   whether the bell settles on the stay, the clapper peels off, or the pair
//!   keeps moving as one rigid body
//!
//! Strike detection and rope bookkeeping run after either mode, then the
//! clock advances.

use tracing::{debug, warn};

use super::contact::{resolve_strike, stay_collision};
use super::forces::{bell_only_accel, clapper_accel, coupled_bell_accel, drive_accel, rigid_accel};
use super::params::Parameters;
use super::rope::ropelength;
use super::states::{BellGeometry, BellState, ContactMode};
use crate::error::SimError;

/// Below this speed, with no pull on the rope, the bell velocity is halved
pub const CREEP_SPEED: f64 = 0.01;

/// Below this speed an attached bell resting against the stay is stopped dead
pub const REST_SPEED: f64 = 0.05;

/// How close to the stay limit counts as resting on it
pub const REST_TOLERANCE: f64 = 0.01;

/// Outcome of integrating the bell body for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BellStep {
    pub angle: f64,
    pub velocity: f64,
    pub accel: f64,
    pub hard_impact: bool, // bounced off the stay faster than HARD_HIT_SPEED
}

/// What an attached clapper does this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachedTransition {
    Rest, // bell stopped against the stay
    Release, // clapper leaves the rim
    Hold, // bell and clapper move as one body
}

/// Advance the bell by one step in-place and move `params` clock forward
///
/// The rope pull is whatever the caller left in `state.wheel_force`;
/// [`BellEnv::step`](super::environment::BellEnv::step) sets it from the
/// normalized action before calling this.
///
/// Returns [`SimError::Diverged`] when the frame leaves any angle or velocity
/// non-finite. The state is left as computed so the caller can inspect it.
pub fn timestep(state: &mut BellState, params: &mut Parameters) -> Result<(), SimError> {
    match state.mode() {
        ContactMode::Free => free_step(state, params),
        ContactMode::Attached => attached_step(state, params),
    }

    let frame_end = params.time() + params.dt();
    resolve_strike(state, frame_end);
    update_rope(state);
    params.advance();

    if !state.is_finite() {
        warn!(time = params.time(), angle = state.angle, velocity = state.velocity, "simulation diverged");
        return Err(SimError::Diverged {
            time: params.time(),
            angle: state.angle,
            velocity: state.velocity,
        });
    }
    Ok(())
}

/// Integrate the bell body: velocity, creep damping, angle, then the stay
pub fn advance_bell(geo: &BellGeometry, angle: f64, velocity: f64, accel: f64, wheel_force: f64, dt: f64) -> BellStep {
    let mut velocity = velocity + accel * dt;
    // extra damping so a resting bell actually stops
    if velocity.abs() < CREEP_SPEED && wheel_force == 0.0 {
        velocity *= 0.5;
    }
    let angle = angle + velocity * dt;
    bounce(geo, angle, velocity, accel)
}

/// Choose between resting on the stay, releasing the clapper, or holding on.
///
/// The release test compares `clapper_accel * clapper_velocity` with the same
/// product for the trial bell step.
pub fn attached_transition(
    geo: &BellGeometry,
    trial: &BellStep,
    clapper_accel: f64,
    clapper_velocity: f64,
    wheel_force: f64,
) -> AttachedTransition {
    let at_stay = (trial.angle.abs() - geo.stay_limit()).abs() < REST_TOLERANCE;

    if trial.velocity.abs() < REST_SPEED && wheel_force == 0.0 && at_stay {
        AttachedTransition::Rest
    } else if clapper_accel * clapper_velocity > trial.accel * trial.velocity {
        AttachedTransition::Release
    } else {
        AttachedTransition::Hold
    }
}

fn bounce(geo: &BellGeometry, angle: f64, velocity: f64, accel: f64) -> BellStep {
    match stay_collision(geo, angle, velocity) {
        Some(impact) => BellStep {
            angle: impact.angle,
            velocity: impact.velocity,
            accel,
            hard_impact: impact.is_hard(),
        },
        None => BellStep { angle, velocity, accel, hard_impact: false },
    }
}

fn commit(state: &mut BellState, step: BellStep) {
    state.angle = step.angle;
    state.velocity = step.velocity;
    state.accel = step.accel;
    if step.hard_impact {
        state.stay_hit += 1;
        debug!(stay_hit = state.stay_hit, velocity = step.velocity, "stay hit");
    }
}

fn free_step(state: &mut BellState, params: &Parameters) {
    let (g, dt) = (params.g(), params.dt());
    let geo = &state.geometry;

    let accel = coupled_bell_accel(geo, g, state.angle, state.clapper_angle, state.clapper_velocity)
        + drive_accel(geo, state.wheel_force)
        - geo.friction * state.velocity;
    let step = advance_bell(geo, state.angle, state.velocity, accel, state.wheel_force, dt);

    // clapper follows the bell values after any bounce
    let c_accel = clapper_accel(geo, g, state.clapper_angle, step.angle, step.accel, step.velocity);
    let c_velocity = state.clapper_velocity + c_accel * dt;
    state.clapper_accel = c_accel - geo.clapper_friction * (c_velocity - step.velocity);
    state.clapper_velocity = c_velocity;
    state.clapper_angle += c_velocity * dt;

    commit(state, step);
}

fn attached_step(state: &mut BellState, params: &Parameters) {
    let (g, dt) = (params.g(), params.dt());
    let geo = &state.geometry;
    let (old_angle, old_velocity) = (state.angle, state.velocity);
    let wheel_force = state.wheel_force;

    // trial: the bell alone, as if the clapper were not there
    let trial_accel = bell_only_accel(geo, g, old_angle)
        + drive_accel(geo, wheel_force)
        - geo.friction * old_velocity;
    let trial = advance_bell(geo, old_angle, old_velocity, trial_accel, wheel_force, dt);

    let c_accel = clapper_accel(geo, g, state.clapper_angle, trial.angle, trial.accel, trial.velocity)
        - geo.clapper_friction * (state.clapper_velocity - trial.velocity);

    match attached_transition(geo, &trial, c_accel, state.clapper_velocity, wheel_force) {
        AttachedTransition::Rest => {
            let limit = geo.stay_limit();
            state.clapper_accel = c_accel;
            commit(state, trial);
            state.velocity = 0.0;
            state.angle = state.angle.signum() * limit;
        }
        AttachedTransition::Release => {
            state.onedge = false;
            state.clapper_accel = c_accel;
            state.clapper_velocity += c_accel * dt;
            state.clapper_angle += state.clapper_velocity * dt;
            commit(state, trial);
        }
        AttachedTransition::Hold => {
            let accel = rigid_accel(geo, g, old_angle, state.clapper_angle, wheel_force)
                - geo.friction * trial.velocity;
            let velocity = old_velocity + accel * dt;
            let angle = old_angle + velocity * dt;
            let step = bounce(geo, angle, velocity, accel);

            // the clapper carries on with the rigid motion; a bounce separates them
            state.clapper_accel = accel;
            state.clapper_velocity = velocity;
            state.clapper_angle += velocity * dt;
            commit(state, step);
        }
    }
}

fn update_rope(state: &mut BellState) {
    let (length, effect_force) = ropelength(state);
    state.rope_length = length;
    state.effect_force = effect_force;
    state.rope_window.push(length, effect_force);
    if let Some(length) = state.rope_window.backstroke_peak() {
        state.max_length = length;
    }
}
