//! Build fully-initialized bell scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - the environment (`BellEnv`) with state at t = 0 and a seeded random source
//! - the demo controller
//! - the horizon and how much history to keep
//!
//! All validation happens here, so a built `Scenario` is ready to run.

use rand::rngs::StdRng;

use crate::configuration::config::{ControllerConfig, ScenarioConfig};
use crate::error::{require_positive, SimError};
use crate::simulation::environment::{BellEnv, Controller};
use crate::simulation::episode::{run_episode, EpisodeSummary};
use crate::simulation::history::BoundedHistory;
use crate::simulation::params::Parameters;
use crate::simulation::states::BellState;

/// Built-in controllers for driving a scenario without an external policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DemoController {
    Idle,
    /// Pull in the direction the bell is already moving: `clamp(gain * velocity)`
    Pump { gain: f64 },
}

impl Controller for DemoController {
    fn act(&mut self, observation: [f64; 2]) -> f64 {
        match *self {
            DemoController::Idle => 0.0,
            DemoController::Pump { gain } => (gain * observation[1]).clamp(-1.0, 1.0),
        }
    }
}

impl From<ControllerConfig> for DemoController {
    fn from(cfg: ControllerConfig) -> Self {
        match cfg {
            ControllerConfig::Idle => DemoController::Idle,
            ControllerConfig::Pump { gain } => DemoController::Pump { gain },
        }
    }
}

/// Runtime bundle built from a [`ScenarioConfig`]
pub struct Scenario {
    pub env: BellEnv<StdRng>,
    pub controller: DemoController,
    pub t_end: f64,
    pub history: BoundedHistory,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from EngineConfig
        let parameters = Parameters::from_fps(cfg.engine.g, cfg.engine.fps)?;

        // Bell state at t = 0 from BellConfig
        let state = BellState::with_geometry(cfg.bell.initial_angle, cfg.bell.geometry())?;

        // Environment from EnvironmentConfig
        let e_cfg = cfg.environment;
        let env = BellEnv::seeded(state, parameters, e_cfg.seed)
            .with_max_force(e_cfg.max_force)?
            .with_assist_probability(e_cfg.assist_probability)?
            .with_actuator(e_cfg.actuator);

        require_positive("t_end", cfg.run.t_end)?;

        Ok(Self {
            env,
            controller: cfg.run.controller.into(),
            t_end: cfg.run.t_end,
            history: BoundedHistory::new(cfg.run.history_capacity),
        })
    }

    /// Run the scenario to its horizon with the built-in controller
    pub fn run(&mut self) -> Result<EpisodeSummary, SimError> {
        run_episode(&mut self.env, &mut self.controller, self.t_end, &mut self.history)
    }
}
