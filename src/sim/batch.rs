//! Batch Driver
//!
//! Runs N independent episodes under one parameter set. Every episode gets a
//! fresh track, model and agent; only the random source and the result rows
//! are shared across iterations. Rows are flushed once, after the last
//! episode.

use std::path::Path;
use tracing::info;

use super::episode::simulate_episode;
use super::{RandomSource, Track};
use crate::agent::{self, build_agent, Agent, Model, PolicyParameters};
use crate::config::SimParameters;
use crate::error::Result;
use crate::persistence::{
    initialize_backup, save_matrix, WriteMode, DEFAULT_SEPARATOR, SAVED_VALUES_NAMES,
};

/// Run `nbsim` episodes with the agent named by the parameter set's policy
/// selector. Returns the recorded rows (empty unless `bckp`).
pub fn run_with(
    sp: &SimParameters,
    nbsim: u32,
    prnt: bool,
    bckp: bool,
    outpth: &Path,
    rng: &mut RandomSource,
) -> Result<Vec<Vec<f64>>> {
    let selector = sp.policy.selector;
    agent::check_selector(selector)?;
    run_with_agents(sp, nbsim, prnt, bckp, outpth, rng, |init_s, params, model| {
        build_agent(selector, init_s, params, model)
    })
}

/// Same as [`run_with`] with a caller-supplied agent factory, invoked once
/// per episode with the initial state, policy parameters and model
pub fn run_with_agents<F>(
    sp: &SimParameters,
    nbsim: u32,
    prnt: bool,
    bckp: bool,
    outpth: &Path,
    rng: &mut RandomSource,
    mut make_agent: F,
) -> Result<Vec<Vec<f64>>>
where
    F: FnMut(f64, PolicyParameters, Model) -> Result<Box<dyn Agent>>,
{
    let mut bckp_vector: Vec<Vec<f64>> = Vec::new();
    if bckp {
        initialize_backup(&SAVED_VALUES_NAMES, outpth, DEFAULT_SEPARATOR)?;
    }

    info!("Running {} simulations", nbsim);
    for i in 0..nbsim {
        let mut track = Track::from_config(&sp.environment);
        let params = PolicyParameters::from(&sp.policy);
        let model = Model::from_config(&sp.model);
        let mut ag = make_agent(sp.policy.init_s, params, model)?;

        let record = simulate_episode(&mut track, &mut *ag, prnt, bckp, &mut bckp_vector, rng);
        if prnt {
            info!(
                "Simulation {}/{}: score={} calls={}",
                i + 1,
                nbsim,
                record.score,
                record.nb_calls
            );
        }
    }

    if bckp {
        save_matrix(&bckp_vector, outpth, DEFAULT_SEPARATOR, WriteMode::Append)?;
        info!(
            "Saved {} rows to {}",
            bckp_vector.len(),
            outpth.display()
        );
    }
    Ok(bckp_vector)
}
