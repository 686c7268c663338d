//! Uniform random baseline. Never queries a model.

use super::{Agent, PolicyParameters};
use crate::sim::RandomSource;

#[derive(Debug, Clone)]
pub struct RandomAgent {
    s: f64,
    a: i32,
    action_space: Vec<i32>,
}

impl RandomAgent {
    pub fn new(init_s: f64, params: PolicyParameters) -> Self {
        Self {
            s: init_s,
            a: params.action_space.first().copied().unwrap_or_default(),
            action_space: params.action_space,
        }
    }
}

impl Agent for RandomAgent {
    fn state(&self) -> f64 {
        self.s
    }

    fn set_state(&mut self, s: f64) {
        self.s = s;
    }

    fn action(&self) -> i32 {
        self.a
    }

    fn choose_action(&mut self, rng: &mut RandomSource) {
        if !self.action_space.is_empty() {
            self.a = self.action_space[rng.index(self.action_space.len())];
        }
    }

    fn nb_calls(&self) -> u64 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_come_from_space() {
        let params = PolicyParameters::new(0, 0, 0.0, 1.0, 0.0, false, vec![-2, 3], 0.0);
        let mut agent = RandomAgent::new(0.0, params);
        let mut rng = RandomSource::seeded(8);

        let mut seen = [false; 2];
        for _ in 0..200 {
            agent.choose_action(&mut rng);
            match agent.action() {
                -2 => seen[0] = true,
                3 => seen[1] = true,
                other => panic!("unexpected action {}", other),
            }
        }
        assert!(seen[0] && seen[1]);
        assert_eq!(agent.nb_calls(), 0);
    }
}
