//! Control environment around a single bell
//!
//! `BellEnv` is the boundary external controllers talk to: a normalized pull in
//! `[-1, 1]` goes in, a two-element scaled observation comes out. It owns the
//! state, the parameters and its own random source, so episodes run in
//! parallel stay independent and reproducible per seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use super::integrator::timestep;
use super::params::Parameters;
use super::states::{observe, BellState};
use crate::error::{require_positive, SimError};

/// Largest rope pull in newtons
pub const DEFAULT_MAX_FORCE: f64 = 600.0;

/// Chance per frame that the pull is redirected along `effect_force`
pub const DEFAULT_ASSIST_PROBABILITY: f64 = 0.5;

/// Maps a raw controller output to a normalized pull
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Actuator {
    #[default]
    Continuous, // pass the action straight through
    Discrete, // 1 above 0.5, otherwise 0
    Probabilistic, // 1 with probability `action`, otherwise 0
}

impl Actuator {
    pub fn apply<R: Rng>(&self, action: f64, rng: &mut R) -> f64 {
        match self {
            Actuator::Continuous => action,
            Actuator::Discrete => {
                if action > 0.5 { 1.0 } else { 0.0 }
            }
            Actuator::Probabilistic => {
                if action > rng.gen::<f64>() { 1.0 } else { 0.0 }
            }
        }
    }
}

/// Anything that turns an observation into an action once per frame
pub trait Controller {
    fn act(&mut self, observation: [f64; 2]) -> f64;
}

impl<F> Controller for F
where
    F: FnMut([f64; 2]) -> f64,
{
    fn act(&mut self, observation: [f64; 2]) -> f64 {
        self(observation)
    }
}

pub struct BellEnv<R = StdRng> {
    state: BellState,
    params: Parameters,
    max_force: f64,
    assist_probability: f64,
    actuator: Actuator,
    rng: R,
}

impl BellEnv<StdRng> {
    /// Environment with a `StdRng` seeded from `seed`
    pub fn seeded(state: BellState, params: Parameters, seed: u64) -> Self {
        Self::new(state, params, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> BellEnv<R> {
    pub fn new(state: BellState, params: Parameters, rng: R) -> Self {
        Self {
            state,
            params,
            max_force: DEFAULT_MAX_FORCE,
            assist_probability: DEFAULT_ASSIST_PROBABILITY,
            actuator: Actuator::default(),
            rng,
        }
    }

    pub fn with_max_force(mut self, max_force: f64) -> Result<Self, SimError> {
        require_positive("max_force", max_force)?;
        self.max_force = max_force;
        Ok(self)
    }

    pub fn with_assist_probability(mut self, probability: f64) -> Result<Self, SimError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(SimError::InvalidConfig {
                field: "assist_probability",
                value: probability,
                reason: "must lie in [0, 1]",
            });
        }
        self.assist_probability = probability;
        Ok(self)
    }

    pub fn with_actuator(mut self, actuator: Actuator) -> Self {
        self.actuator = actuator;
        self
    }

    /// Apply a normalized pull for one frame.
    ///
    /// After the frame a fresh draw may point the pull along the current
    /// `effect_force`. That override is only visible in `wheel_force` until
    /// the next call replaces it.
    pub fn step(&mut self, normalized_force: f64) -> Result<(), SimError> {
        self.state.wheel_force = normalized_force * self.max_force;
        timestep(&mut self.state, &mut self.params)?;

        if self.rng.gen::<f64>() < self.assist_probability {
            self.state.wheel_force = self.state.effect_force * self.max_force;
        }
        Ok(())
    }

    /// Map a raw controller output through the actuator, then step
    pub fn act(&mut self, action: f64) -> Result<(), SimError> {
        let force = self.actuator.apply(action, &mut self.rng);
        self.step(force)
    }

    /// `[angle / (pi + stay_angle), velocity]`
    pub fn observe(&self) -> [f64; 2] {
        observe(&self.state)
    }

    pub fn state(&self) -> &BellState {
        &self.state
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn time(&self) -> f64 {
        self.params.time()
    }

    pub fn max_force(&self) -> f64 {
        self.max_force
    }

    pub fn actuator(&self) -> Actuator {
        self.actuator
    }
}
