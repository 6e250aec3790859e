//! Core state types for the bell simulation.
//!
//! - `BellGeometry`: masses, lengths and limits, fixed once a state is built
//! - `BellState`: the geometry plus the dynamic bell/clapper state advanced
//!   one frame at a time by the integrator
//!
//! Angles are radians measured from hanging rest. The clapper angle is absolute
//! (relative to gravity), not relative to the bell.

use std::f64::consts::PI;

use crate::error::{require_angle, require_finite, require_positive, SimError};
use crate::simulation::rope::{ropelength, RopeWindow};

/// Which of the two contact modes the next frame integrates in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMode {
    Free, // clapper swings on its own pivot
    Attached, // clapper rests on the rim and moves with the bell
}

/// Geometry and mass constants of one bell
#[derive(Debug, Clone, PartialEq)]
pub struct BellGeometry {
    pub radius: f64, // wheel radius, m
    pub garter_hole: f64, // garter hole offset from the stay, rad
    pub l1: f64, // pivot to bell COM, m
    pub l2: f64, // clapper length, m
    pub p: f64, // clapper pivot offset from the bell pivot, m
    pub k1: f64, // bell inertia coefficient, I1 = k1 m1 l1^2
    pub k2: f64, // clapper inertia coefficient
    pub m1: f64, // bell mass, kg
    pub m2: f64, // clapper mass, kg
    pub stay_angle: f64, // how far past the balance the stay allows, rad
    pub clapper_limit: f64, // max clapper swing relative to the bell, rad
    pub friction: f64, // bell friction, 1/s
    pub clapper_friction: f64, // clapper friction on relative velocity, 1/s
}

impl BellGeometry {
    /// Reference proportions for a wheel of the given radius
    pub fn with_radius(radius: f64) -> Self {
        let m1 = 500.0;
        let friction = 0.025;
        Self {
            radius,
            garter_hole: PI / 4.0,
            l1: 0.7 * radius,
            l2: 0.65 * radius,
            p: 0.1 * radius,
            k1: 1.5,
            k2: 1.5,
            m1,
            m2: 0.05 * m1,
            stay_angle: 0.15,
            clapper_limit: 0.3,
            friction,
            clapper_friction: 0.1 * friction,
        }
    }

    /// Reject geometry that would make the equations of motion meaningless
    pub fn validate(&self) -> Result<(), SimError> {
        require_positive("radius", self.radius)?;
        require_finite("garter_hole", self.garter_hole)?;
        require_positive("l1", self.l1)?;
        require_positive("l2", self.l2)?;
        require_finite("p", self.p)?;
        if self.p < 0.0 {
            return Err(SimError::InvalidConfig { field: "p", value: self.p, reason: "must be >= 0" });
        }
        require_positive("k1", self.k1)?;
        require_positive("k2", self.k2)?;
        require_positive("m1", self.m1)?;
        require_positive("m2", self.m2)?;
        require_angle("stay_angle", self.stay_angle)?;
        require_angle("clapper_limit", self.clapper_limit)?;
        require_positive("friction", self.friction)?;
        require_positive("clapper_friction", self.clapper_friction)?;
        Ok(())
    }

    /// Magnitude of the angle at which the stay engages
    pub fn stay_limit(&self) -> f64 {
        PI + self.stay_angle
    }

    /// Bell moment of inertia about the pivot, without the clapper
    pub fn bell_inertia(&self) -> f64 {
        self.m1 * (1.0 + self.k1) * self.l1 * self.l1
    }
}

impl Default for BellGeometry {
    fn default() -> Self {
        Self::with_radius(0.5)
    }
}

/// Dynamic state of bell and clapper for one episode
#[derive(Debug, Clone)]
pub struct BellState {
    pub(crate) geometry: BellGeometry,

    pub angle: f64, // bell angle
    pub velocity: f64, // bell angular velocity
    pub accel: f64, // bell angular acceleration

    pub clapper_angle: f64, // absolute clapper angle
    pub clapper_velocity: f64,
    pub clapper_accel: f64,

    pub onedge: bool, // clapper resting on the rim
    pub ding: bool, // true only on the frame a strike happens
    pub ding_reset: bool, // armed once the clapper has swung clear of the rim
    pub ding_time: f64, // simulated time of the last strike
    pub volume_ref: f64, // loudness reference of the last strike

    pub wheel_force: f64, // rope pull on the wheel, N
    pub stay_hit: u32, // hard stay collisions so far

    pub rope_length: f64, // rope above the garter hole, relative to the minimum
    pub effect_force: f64, // direction of mechanical advantage, in [-1, 1]
    pub max_length: f64, // rope length at the last backstroke peak
    pub(crate) rope_window: RopeWindow,
}

impl BellState {
    /// Bell at `initial_angle` with the reference geometry, everything at rest
    pub fn new(initial_angle: f64) -> Self {
        Self::build(initial_angle, BellGeometry::default())
    }

    /// Bell at `initial_angle` with custom geometry, validated first
    pub fn with_geometry(initial_angle: f64, geometry: BellGeometry) -> Result<Self, SimError> {
        require_finite("initial_angle", initial_angle)?;
        geometry.validate()?;
        Ok(Self::build(initial_angle, geometry))
    }

    fn build(initial_angle: f64, geometry: BellGeometry) -> Self {
        let mut state = Self {
            geometry,
            angle: initial_angle,
            velocity: 0.0,
            accel: 0.0,
            clapper_angle: initial_angle,
            clapper_velocity: 0.0,
            clapper_accel: 0.0,
            onedge: false,
            ding: false,
            ding_reset: true,
            ding_time: 0.0,
            volume_ref: 0.0,
            wheel_force: 0.0,
            stay_hit: 0,
            rope_length: 0.0,
            effect_force: 0.0,
            max_length: 0.0,
            rope_window: RopeWindow::default(),
        };
        let (length, effect_force) = ropelength(&state);
        state.rope_length = length;
        state.effect_force = effect_force;
        state
    }

    pub fn geometry(&self) -> &BellGeometry {
        &self.geometry
    }

    pub fn mode(&self) -> ContactMode {
        if self.onedge {
            ContactMode::Attached
        } else {
            ContactMode::Free
        }
    }

    /// Clapper angle measured from the bell
    pub fn relative_clapper_angle(&self) -> f64 {
        self.clapper_angle - self.angle
    }

    /// Recent rope lengths, oldest first
    pub fn rope_history(&self) -> &[f64] {
        self.rope_window.lengths()
    }

    /// Kinetic plus potential energy of the bell body alone
    pub fn bell_energy(&self, g: f64) -> f64 {
        let geo = &self.geometry;
        0.5 * geo.bell_inertia() * self.velocity * self.velocity
            + geo.m1 * g * geo.l1 * (1.0 - self.angle.cos())
    }

    /// True when every angle and velocity is a finite number
    pub fn is_finite(&self) -> bool {
        self.angle.is_finite()
            && self.velocity.is_finite()
            && self.clapper_angle.is_finite()
            && self.clapper_velocity.is_finite()
    }
}

/// Observation handed to controllers: `[angle / (pi + stay_angle), velocity]`
pub fn observe(state: &BellState) -> [f64; 2] {
    [state.angle / state.geometry.stay_limit(), state.velocity]
}
