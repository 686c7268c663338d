//! Policy Parameters
//!
//! Tuning scalars handed to an agent at construction.

use crate::config::PolicyConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct PolicyParameters {
    /// Planning iterations per decision
    pub budget: u32,
    /// Maximum planning depth
    pub horizon: u32,
    /// UCB exploration constant
    pub uct_cst: f64,
    pub discount_factor: f64,
    /// Probability of acting uniformly at random instead of greedily
    pub epsilon: f64,
    /// Keep the subtree of the taken action for the next decision
    pub reuse: bool,
    pub action_space: Vec<i32>,
    pub init_s: f64,
}

impl PolicyParameters {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        budget: u32,
        horizon: u32,
        uct_cst: f64,
        discount_factor: f64,
        epsilon: f64,
        reuse: bool,
        action_space: Vec<i32>,
        init_s: f64,
    ) -> Self {
        Self {
            budget,
            horizon,
            uct_cst,
            discount_factor,
            epsilon,
            reuse,
            action_space,
            init_s,
        }
    }

    pub fn nb_actions(&self) -> usize {
        self.action_space.len()
    }
}

impl From<&PolicyConfig> for PolicyParameters {
    fn from(config: &PolicyConfig) -> Self {
        Self::new(
            config.budget,
            config.horizon,
            config.uct_cst,
            config.discount_factor,
            config.epsilon,
            config.reuse,
            config.action_space.clone(),
            config.init_s,
        )
    }
}
