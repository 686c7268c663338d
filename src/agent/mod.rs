//! Decision Agents
//!
//! The episode driver only sees the [`Agent`] trait. Concrete policies are
//! picked by the parameter set's selector through [`build_agent`].

pub mod model;
pub mod policy;
pub mod random_agent;
pub mod uct;

pub use model::Model;
pub use policy::PolicyParameters;
pub use random_agent::RandomAgent;
pub use uct::UctAgent;

use crate::error::{Result, TrackSimError};
use crate::sim::RandomSource;

/// Selector value for the open-loop UCT planner
pub const UCT_SELECTOR: u32 = 0;
/// Selector value for the uniform random policy
pub const RANDOM_SELECTOR: u32 = 1;

/// Capabilities the episode driver needs from a policy
#[cfg_attr(test, mockall::automock)]
pub trait Agent {
    /// Current position
    fn state(&self) -> f64;

    fn set_state(&mut self, s: f64);

    /// Last chosen action
    fn action(&self) -> i32;

    /// Pick the next action from the current position
    fn choose_action(&mut self, rng: &mut RandomSource);

    /// Policy evaluations (model calls) performed so far
    fn nb_calls(&self) -> u64;
}

/// Build the agent named by `selector`
pub fn build_agent(
    selector: u32,
    init_s: f64,
    params: PolicyParameters,
    model: Model,
) -> Result<Box<dyn Agent>> {
    match selector {
        UCT_SELECTOR => Ok(Box::new(UctAgent::new(init_s, params, model))),
        RANDOM_SELECTOR => Ok(Box::new(RandomAgent::new(init_s, params))),
        other => Err(TrackSimError::UnknownPolicy(other)),
    }
}

/// Fail early on a selector [`build_agent`] would reject
pub fn check_selector(selector: u32) -> Result<()> {
    match selector {
        UCT_SELECTOR | RANDOM_SELECTOR => Ok(()),
        other => Err(TrackSimError::UnknownPolicy(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TrackDynamics;

    fn params() -> PolicyParameters {
        PolicyParameters::new(10, 5, 0.7, 0.9, 0.0, false, vec![-1, 1], 0.0)
    }

    fn model() -> Model {
        Model::new(TrackDynamics::new(5.0, 0.0, 0.0))
    }

    #[test]
    fn test_build_known_selectors() {
        let agent = build_agent(UCT_SELECTOR, 1.5, params(), model()).unwrap();
        assert_eq!(agent.state(), 1.5);
        assert_eq!(agent.nb_calls(), 0);

        let agent = build_agent(RANDOM_SELECTOR, -0.5, params(), model()).unwrap();
        assert_eq!(agent.state(), -0.5);
    }

    #[test]
    fn test_unknown_selector() {
        assert!(matches!(
            build_agent(7, 0.0, params(), model()),
            Err(TrackSimError::UnknownPolicy(7))
        ));
        assert!(check_selector(7).is_err());
        assert!(check_selector(UCT_SELECTOR).is_ok());
    }
}
