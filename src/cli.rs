use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::agent;
use crate::config::SimParameters;
use crate::error::Result;
use crate::persistence::backup_path;
use crate::sim::{run_with, RandomSource};

/// Episodes per batch when no count is given
pub const DEFAULT_NB_SIMULATIONS: u32 = 100;

#[derive(Parser, Debug)]
#[command(name = "tracksim")]
#[command(version = "0.1.0")]
#[command(about = "Run planning agents on a noisy 1D track and back up episode metrics", long_about = None)]
pub struct Cli {
    /// Number of episodes to simulate
    #[arg(default_value_t = DEFAULT_NB_SIMULATIONS)]
    pub nbsim: u32,

    /// Directory holding main.toml
    #[arg(long, env = "TRACKSIM_CONFIG_DIR", default_value = "config")]
    pub config_dir: PathBuf,
}

/// Load the parameter set from `config_dir`, run `nbsim` recorded episodes
/// and return the backup file written under `output_root`
pub fn bunch_of_run(
    config_dir: &Path,
    output_root: &Path,
    nbsim: u32,
    rng: &mut RandomSource,
) -> Result<PathBuf> {
    let sp = SimParameters::load_from(config_dir)?;
    agent::check_selector(sp.policy.selector)?;

    let path = output_root.join(backup_path(&sp));
    println!("Output: {}", path.display());
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    info!(seed = rng.seed(), nbsim, "starting batch");
    run_with(&sp, nbsim, false, true, &path, rng)?;
    Ok(path)
}
