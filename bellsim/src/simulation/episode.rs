//! Run one episode of a controller against a `BellEnv`
//!
//! The loop is the same one an external training harness would write:
//! observe, act, record, until the simulated clock reaches the horizon.

use rand::Rng;
use serde::Serialize;

use super::environment::{BellEnv, Controller};
use super::history::HistorySink;
use crate::error::SimError;

/// What happened during an episode, for logging or a harness to score
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EpisodeSummary {
    pub frames: u64,
    pub time: f64,
    pub dings: u32,
    pub stay_hits: u32,
    pub peak_angle: f64, // largest |angle| seen
    pub final_angle: f64,
    pub final_velocity: f64,
    pub max_length: f64,
}

/// Drive `env` with `controller` until `env.time() >= t_end`.
///
/// The initial sample is recorded before the first frame, then one sample per
/// frame.
pub fn run_episode<R, C, H>(
    env: &mut BellEnv<R>,
    controller: &mut C,
    t_end: f64,
    history: &mut H,
) -> Result<EpisodeSummary, SimError>
where
    R: Rng,
    C: Controller + ?Sized,
    H: HistorySink + ?Sized,
{
    let mut frames = 0;
    let mut dings = 0;
    let mut peak_angle = env.state().angle.abs();
    history.record(env.time(), env.state().angle);

    while env.time() < t_end {
        let action = controller.act(env.observe());
        env.act(action)?;

        let state = env.state();
        frames += 1;
        if state.ding {
            dings += 1;
        }
        peak_angle = peak_angle.max(state.angle.abs());
        history.record(env.time(), state.angle);
    }

    let state = env.state();
    Ok(EpisodeSummary {
        frames,
        time: env.time(),
        dings,
        stay_hits: state.stay_hit,
        peak_angle,
        final_angle: state.angle,
        final_velocity: state.velocity,
        max_length: state.max_length,
    })
}
