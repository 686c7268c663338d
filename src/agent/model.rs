//! Generative Model
//!
//! What a planner believes the track does. It shares the environment's
//! dynamics but keeps no step counter, so planning never advances the
//! episode score.

use crate::config::TrackConfig;
use crate::sim::{RandomSource, TrackDynamics};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Model {
    dynamics: TrackDynamics,
}

impl Model {
    pub fn new(dynamics: TrackDynamics) -> Self {
        Self { dynamics }
    }

    pub fn from_config(config: &TrackConfig) -> Self {
        Self::new(TrackDynamics::from(config))
    }

    pub fn is_terminal(&self, s: f64) -> bool {
        self.dynamics.is_terminal(s)
    }

    pub fn transition(&self, s: f64, a: i32, rng: &mut RandomSource) -> f64 {
        self.dynamics.sample_next(s, a, rng)
    }

    pub fn reward(&self, s: f64) -> f64 {
        self.dynamics.reward(s)
    }
}
