//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings shared by every frame:
//! - gravitational acceleration `g`,
//! - fixed step size `dt`,
//! - the simulated clock, advanced only by the integrator

use crate::error::{require_positive, SimError};

/// Frame rate of the reference model, 60 frames per simulated second
pub const DEFAULT_FPS: f64 = 60.0;

/// Gravity used by the reference model (9.8, not 9.81)
pub const DEFAULT_G: f64 = 9.8;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    g: f64, // gravitational acceleration, m/s^2
    dt: f64, // step size, s
    time: f64, // simulated time, s
}

impl Parameters {
    /// Validated constructor, the clock starts at zero
    pub fn new(g: f64, dt: f64) -> Result<Self, SimError> {
        require_positive("g", g)?;
        require_positive("dt", dt)?;
        Ok(Self { g, dt, time: 0.0 })
    }

    /// Build from a frame rate instead of a step size
    pub fn from_fps(g: f64, fps: f64) -> Result<Self, SimError> {
        require_positive("fps", fps)?;
        Self::new(g, 1.0 / fps)
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Move the clock forward by one step
    pub(crate) fn advance(&mut self) {
        self.time += self.dt;
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: DEFAULT_G,
            dt: 1.0 / DEFAULT_FPS,
            time: 0.0,
        }
    }
}
