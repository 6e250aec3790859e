//! Rope kinematics at the garter hole.
//!
//! The rope leaves the wheel at the garter hole. Past the handstroke or
//! backstroke end of the wheel the rope is simply wound on or off the rim, so
//! its length is linear in the angle. In between, the hole sits on the arc
//! closest to the ceiling and the length is the straight-line distance from
//! the rope guide to the rim point.

use std::f64::consts::FRAC_PI_2;
use std::f64::consts::PI;

use nalgebra::Vector2;

use super::states::BellState;

pub type NVec2 = Vector2<f64>;

/// Rope length above the garter hole and the signed effective force.
///
/// `effect_force` is -1 when a pull helps the handstroke, +1 when it helps the
/// backstroke, and varies smoothly in between.
pub fn ropelength(state: &BellState) -> (f64, f64) {
    let geo = state.geometry();
    let radius = geo.radius;
    let hole_angle = state.angle - PI + geo.garter_hole;

    if hole_angle > 0.0 {
        // fully handstroke
        (radius * (hole_angle + 1.0), -1.0)
    } else if hole_angle <= -FRAC_PI_2 {
        // fully backstroke
        (radius * (-FRAC_PI_2 - hole_angle + 1.0), 1.0)
    } else {
        let rim = NVec2::new(radius + radius * hole_angle.sin(), radius - radius * hole_angle.cos());
        let tangent = NVec2::new(hole_angle.cos(), hole_angle.sin());
        let length = rim.norm();
        let effect_force = -rim.normalize().dot(&tangent.normalize());
        (length, effect_force.clamp(-1.0, 1.0))
    }
}

/// Last three rope samples, oldest first, used to spot backstroke peaks
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RopeWindow {
    lengths: [f64; 3],
    forces: [f64; 3],
    len: usize,
}

impl RopeWindow {
    pub fn push(&mut self, length: f64, effect_force: f64) {
        if self.len < 3 {
            self.lengths[self.len] = length;
            self.forces[self.len] = effect_force;
            self.len += 1;
        } else {
            self.lengths.rotate_left(1);
            self.forces.rotate_left(1);
            self.lengths[2] = length;
            self.forces[2] = effect_force;
        }
    }

    pub fn lengths(&self) -> &[f64] {
        &self.lengths[..self.len]
    }

    pub fn forces(&self) -> &[f64] {
        &self.forces[..self.len]
    }

    /// Newest length when the middle sample was a peak on the backstroke side
    pub fn backstroke_peak(&self) -> Option<f64> {
        if self.len < 3 || self.forces[2] <= 0.0 {
            return None;
        }
        let [oldest, middle, newest] = self.lengths;
        (newest < middle && middle > oldest).then_some(newest)
    }
}
