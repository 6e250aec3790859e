//! Configuration types for loading bell scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]      – gravity and frame rate
//! - [`BellConfig`]        – initial angle and any geometry overrides
//! - [`EnvironmentConfig`] – pull strength, direction assist, actuator, seed
//! - [`RunConfig`]         – horizon, history length and the demo controller
//! - [`ScenarioConfig`]    – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every section except `run` may be omitted, as may any field with a default:
//!
//! ```yaml
//! engine:
//!   g: 9.8
//!   fps: 60.0
//!
//! bell:
//!   initial_angle: 0.5      # radians from hanging rest
//!   radius: 0.5             # lengths scale with the radius unless overridden
//!   stay_angle: 0.15
//!
//! environment:
//!   max_force: 600.0        # newtons at a normalized pull of 1
//!   assist_probability: 0.5
//!   seed: 42
//!   actuator: continuous    # or "discrete", "probabilistic"
//!
//! run:
//!   t_end: 60.0
//!   history_capacity: 3600
//!   controller:
//!     kind: pump
//!     gain: 1.0
//! ```
//!
//! The scenario builder maps this onto the runtime types and validates it.

use serde::Deserialize;

use crate::simulation::environment::{Actuator, DEFAULT_ASSIST_PROBABILITY, DEFAULT_MAX_FORCE};
use crate::simulation::params::{DEFAULT_FPS, DEFAULT_G};
use crate::simulation::states::BellGeometry;

/// Global physical constants and step rate
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub g: f64, // gravitational acceleration, m/s^2
    pub fps: f64, // frames per simulated second, dt = 1 / fps
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { g: DEFAULT_G, fps: DEFAULT_FPS }
    }
}

/// Initial angle plus optional overrides of the reference geometry
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BellConfig {
    pub initial_angle: f64,
    pub radius: Option<f64>,
    pub garter_hole: Option<f64>,
    pub l1: Option<f64>,
    pub l2: Option<f64>,
    pub p: Option<f64>,
    pub k1: Option<f64>,
    pub k2: Option<f64>,
    pub m1: Option<f64>,
    pub m2: Option<f64>,
    pub stay_angle: Option<f64>,
    pub clapper_limit: Option<f64>,
    pub friction: Option<f64>,
    pub clapper_friction: Option<f64>,
}

impl BellConfig {
    /// Reference geometry for the configured radius with overrides applied.
    /// Validation happens when the state is built.
    pub fn geometry(&self) -> BellGeometry {
        let mut geo = match self.radius {
            Some(radius) => BellGeometry::with_radius(radius),
            None => BellGeometry::default(),
        };
        let overrides = [
            (&mut geo.garter_hole, self.garter_hole),
            (&mut geo.l1, self.l1),
            (&mut geo.l2, self.l2),
            (&mut geo.p, self.p),
            (&mut geo.k1, self.k1),
            (&mut geo.k2, self.k2),
            (&mut geo.m1, self.m1),
            (&mut geo.m2, self.m2),
            (&mut geo.stay_angle, self.stay_angle),
            (&mut geo.clapper_limit, self.clapper_limit),
            (&mut geo.friction, self.friction),
            (&mut geo.clapper_friction, self.clapper_friction),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
        geo
    }
}

/// Settings of the control environment around the bell
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub max_force: f64, // pull in newtons for a normalized force of 1
    pub assist_probability: f64, // chance per frame of the direction assist
    pub seed: u64, // seed of the environment's random source
    pub actuator: Actuator,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            max_force: DEFAULT_MAX_FORCE,
            assist_probability: DEFAULT_ASSIST_PROBABILITY,
            seed: 42,
            actuator: Actuator::Continuous,
        }
    }
}

/// Which built-in controller drives the demo run
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ControllerConfig {
    #[default]
    Idle, // never pulls
    Pump { gain: f64 }, // pulls with the swing, scaled by `gain`
}

/// Episode settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub t_end: f64, // simulated seconds to run
    #[serde(default)]
    pub history_capacity: usize, // samples of (time, angle) kept, 0 keeps none
    #[serde(default)]
    pub controller: ControllerConfig,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub bell: BellConfig,
    #[serde(default)]
    pub environment: EnvironmentConfig,
    pub run: RunConfig,
}
