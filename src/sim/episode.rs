//! Single Episode Driver
//!
//! Runs one agent against one track until the agent's position is terminal.
//! There is no step ceiling: an agent that never reaches the boundary keeps
//! the loop running.

use std::time::Instant;
use tracing::{debug, info};

use super::display::describe_step;
use super::{RandomSource, Track};
use crate::agent::Agent;

/// Measurements of one finished episode, in backup column order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeRecord {
    /// Steps until termination
    pub score: u32,
    /// Wall-clock duration of the episode loop in milliseconds
    pub computational_cost_ms: f64,
    /// Policy evaluations reported by the agent at the end
    pub nb_calls: u64,
}

impl EpisodeRecord {
    /// Row matching `score,computational_cost,nb_calls`
    pub fn to_row(&self) -> Vec<f64> {
        vec![
            f64::from(self.score),
            self.computational_cost_ms,
            self.nb_calls as f64,
        ]
    }
}

/// Run one episode. When `bckp` is set the record is also appended to
/// `backup` as a row.
pub fn simulate_episode<A: Agent + ?Sized>(
    track: &mut Track,
    agent: &mut A,
    prnt: bool,
    bckp: bool,
    backup: &mut Vec<Vec<f64>>,
    rng: &mut RandomSource,
) -> EpisodeRecord {
    let start = Instant::now();
    while !track.is_terminal(agent.state()) {
        agent.choose_action(rng);
        if prnt {
            info!("{}", describe_step(track, agent));
        }
        let next = track.transition(agent.state(), agent.action(), rng);
        agent.set_state(next);
    }
    let elapsed = start.elapsed();
    if prnt {
        info!("{}", describe_step(track, agent));
    }

    let record = EpisodeRecord {
        score: track.time(),
        computational_cost_ms: elapsed.as_secs_f64() * 1000.0,
        nb_calls: agent.nb_calls(),
    };
    debug!(
        score = record.score,
        cost_ms = record.computational_cost_ms,
        nb_calls = record.nb_calls,
        "episode finished"
    );

    if bckp {
        backup.push(record.to_row());
    }
    record
}
