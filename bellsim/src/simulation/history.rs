//! Caller-owned recording of the `(time, bell_angle)` trajectory.
//!
//! The engine never stores the trajectory itself. Whoever runs an episode
//! passes a sink and decides how much of it to keep.

use std::collections::VecDeque;

/// Receives one sample per frame
pub trait HistorySink {
    fn record(&mut self, time: f64, bell_angle: f64);
}

/// Discards everything
impl HistorySink for () {
    fn record(&mut self, _time: f64, _bell_angle: f64) {}
}

/// Ring buffer keeping the most recent `capacity` samples
#[derive(Debug, Clone)]
pub struct BoundedHistory {
    capacity: usize,
    samples: VecDeque<(f64, f64)>,
}

impl BoundedHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples oldest first
    pub fn iter(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.samples.iter()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|&(t, _)| t).collect()
    }

    pub fn angles(&self) -> Vec<f64> {
        self.samples.iter().map(|&(_, a)| a).collect()
    }
}

impl HistorySink for BoundedHistory {
    fn record(&mut self, time: f64, bell_angle: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back((time, bell_angle));
    }
}
