pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{observe, BellGeometry, BellState, ContactMode};
pub use simulation::params::Parameters;
pub use simulation::rope::ropelength;
pub use simulation::integrator::{timestep, AttachedTransition, BellStep};
pub use simulation::contact::{resolve_strike, stay_collision, StayImpact};
pub use simulation::environment::{Actuator, BellEnv, Controller};
pub use simulation::history::{BoundedHistory, HistorySink};
pub use simulation::episode::{run_episode, EpisodeSummary};
pub use simulation::scenario::{DemoController, Scenario};

pub use configuration::config::{BellConfig, ControllerConfig, EngineConfig, EnvironmentConfig, RunConfig, ScenarioConfig};

pub use error::SimError;

pub use benchmark::benchmark::bench_timestep;
