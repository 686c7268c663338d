use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::{Result, TrackSimError};

/// Full parameter set for one batch of simulations
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimParameters {
    /// Real environment the agent acts in
    pub environment: TrackConfig,
    /// Generative model the planner queries
    pub model: TrackConfig,
    pub policy: PolicyConfig,
}

/// Geometry and noise of a track
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackConfig {
    /// Domain half-width
    pub track_len: f64,
    /// Transition noise standard deviation
    pub stddev: f64,
    /// Probability an action is applied with the opposite sign
    pub failure_probability: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PolicyConfig {
    /// 0 = open-loop UCT, 1 = uniform random
    pub selector: u32,
    /// Planning iterations per decision
    pub budget: u32,
    /// Maximum planning depth
    pub horizon: u32,
    /// UCB exploration constant
    pub uct_cst: f64,
    pub discount_factor: f64,
    /// Probability of replacing the planned action with a random one
    pub epsilon: f64,
    /// Keep the subtree under the taken action between decisions
    pub reuse: bool,
    pub action_space: Vec<i32>,
    /// Initial agent position
    pub init_s: f64,
}

impl SimParameters {
    /// Load parameters from `<config_dir>/main.toml` and the environment
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let params = Self::build(config_dir.as_ref())?;
        params.validate()?;
        Ok(params)
    }

    fn build(config_dir: &Path) -> std::result::Result<Self, ConfigError> {
        let defaults = Self::default_config();

        Config::builder()
            .set_default("environment.track_len", defaults.environment.track_len)?
            .set_default("environment.stddev", defaults.environment.stddev)?
            .set_default(
                "environment.failure_probability",
                defaults.environment.failure_probability,
            )?
            .set_default("model.track_len", defaults.model.track_len)?
            .set_default("model.stddev", defaults.model.stddev)?
            .set_default("model.failure_probability", defaults.model.failure_probability)?
            .set_default("policy.selector", i64::from(defaults.policy.selector))?
            .set_default("policy.budget", i64::from(defaults.policy.budget))?
            .set_default("policy.horizon", i64::from(defaults.policy.horizon))?
            .set_default("policy.uct_cst", defaults.policy.uct_cst)?
            .set_default("policy.discount_factor", defaults.policy.discount_factor)?
            .set_default("policy.epsilon", defaults.policy.epsilon)?
            .set_default("policy.reuse", defaults.policy.reuse)?
            .set_default(
                "policy.action_space",
                defaults
                    .policy
                    .action_space
                    .iter()
                    .map(|&a| i64::from(a))
                    .collect::<Vec<i64>>(),
            )?
            .set_default("policy.init_s", defaults.policy.init_s)?
            .add_source(File::from(config_dir.join("main")).required(false))
            // TRACKSIM__POLICY__BUDGET=500, etc.
            .add_source(
                Environment::with_prefix("TRACKSIM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("policy.action_space"),
            )
            .build()?
            .try_deserialize()
    }

    /// Parameters used when no configuration file is present
    pub fn default_config() -> Self {
        Self {
            environment: TrackConfig {
                track_len: 5.0,
                stddev: 0.5,
                failure_probability: 0.1,
            },
            model: TrackConfig {
                track_len: 5.0,
                stddev: 0.5,
                failure_probability: 0.1,
            },
            policy: PolicyConfig {
                selector: 0,
                budget: 100,
                horizon: 10,
                uct_cst: 0.7,
                discount_factor: 0.9,
                epsilon: 0.0,
                reuse: false,
                action_space: vec![-1, 1],
                init_s: 0.0,
            },
        }
    }

    /// Reject values the backup path cannot encode and an empty action
    /// space. Every padded value must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        self.environment.validate([
            "environment.track_len",
            "environment.stddev",
            "environment.failure_probability",
        ])?;
        self.model.validate([
            "model.track_len",
            "model.stddev",
            "model.failure_probability",
        ])?;

        let policy = &self.policy;
        check_padded("policy.uct_cst", policy.uct_cst)?;
        check_padded("policy.discount_factor", policy.discount_factor)?;
        check_padded("policy.epsilon", policy.epsilon)?;
        if policy.action_space.is_empty() {
            return Err(TrackSimError::invalid(
                "policy.action_space",
                "needs at least one action",
            ));
        }
        Ok(())
    }
}

impl TrackConfig {
    /// `names` are the dotted keys of track_len, stddev and failure_probability
    fn validate(&self, names: [&'static str; 3]) -> Result<()> {
        check_padded(names[0], self.track_len)?;
        check_padded(names[1], self.stddev)?;
        check_padded(names[2], self.failure_probability)
    }
}

fn check_padded(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TrackSimError::invalid(name, "must be finite and >= 0"))
    }
}
