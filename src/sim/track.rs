//! 1D Track Environment
//!
//! A position moves along a line under signed integer actions. Every
//! transition adds Gaussian noise and, with the reversal probability, applies
//! the action with the opposite sign. Reaching `|s| >= track_len` ends the
//! episode.

use super::numeric::is_less_than;
use super::random::RandomSource;
use crate::config::TrackConfig;

/// Transition, termination and reward rules shared by the environment and
/// by the planning model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackDynamics {
    /// Half-width of the domain; `|s| >= track_len` is terminal
    pub track_len: f64,
    /// Standard deviation of the additive transition noise
    pub stddev: f64,
    /// Probability that an action is applied with the opposite sign
    pub failure_probability: f64,
}

impl TrackDynamics {
    pub fn new(track_len: f64, stddev: f64, failure_probability: f64) -> Self {
        Self {
            track_len,
            stddev,
            failure_probability,
        }
    }

    /// Boundary or beyond
    pub fn is_terminal(&self, s: f64) -> bool {
        !is_less_than(s.abs(), self.track_len)
    }

    /// Sample the next position. Noise is drawn first, then the reversal
    /// draw; only the action term is ever negated.
    pub fn sample_next(&self, s: f64, a: i32, rng: &mut RandomSource) -> f64 {
        let noise = rng.normal(0.0, self.stddev);
        let mut action_effect = f64::from(a);
        if is_less_than(rng.uniform(0.0, 1.0), self.failure_probability) {
            action_effect = -action_effect;
        }
        s + action_effect + noise
    }

    /// Sparse reward: 1 once the boundary is reached, 0 inside
    pub fn reward(&self, s: f64) -> f64 {
        if is_less_than(s.abs(), self.track_len) {
            0.0
        } else {
            1.0
        }
    }
}

impl From<&TrackConfig> for TrackDynamics {
    fn from(config: &TrackConfig) -> Self {
        Self::new(config.track_len, config.stddev, config.failure_probability)
    }
}

/// Environment for one episode: the dynamics plus an elapsed step counter
#[derive(Debug, Clone)]
pub struct Track {
    dynamics: TrackDynamics,
    time: u32,
}

impl Track {
    /// Create a fresh environment at step 0
    pub fn new(dynamics: TrackDynamics) -> Self {
        Self { dynamics, time: 0 }
    }

    pub fn from_config(config: &TrackConfig) -> Self {
        Self::new(TrackDynamics::from(config))
    }

    /// Steps taken so far (the episode score)
    pub fn time(&self) -> u32 {
        self.time
    }

    pub fn dynamics(&self) -> &TrackDynamics {
        &self.dynamics
    }

    pub fn is_terminal(&self, s: f64) -> bool {
        self.dynamics.is_terminal(s)
    }

    /// Advance one step from `s` under action `a`
    pub fn transition(&mut self, s: f64, a: i32, rng: &mut RandomSource) -> f64 {
        let next = self.dynamics.sample_next(s, a, rng);
        self.time += 1;
        next
    }

    /// Not consumed by the recorded metrics
    pub fn reward(&self, s: f64) -> f64 {
        self.dynamics.reward(s)
    }
}
