use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::Path;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use tracksim::cli::{self, Cli};
use tracksim::RandomSource;

fn main() -> anyhow::Result<()> {
    init_logging();

    // Seeded once; every episode of the run draws from this source
    let mut rng = RandomSource::from_time();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            warn!("invalid invocation, nothing simulated");
            eprintln!("Error: number of input arguments unknown, expected at most one episode count");
            eprintln!("{e}");
            return Ok(());
        }
    };

    println!("Run {} simulations", cli.nbsim);
    let result = cli::bunch_of_run(&cli.config_dir, Path::new("."), cli.nbsim, &mut rng)
        .with_context(|| format!("batch with config from {}", cli.config_dir.display()));
    if let Err(ref e) = result {
        error!("{:#}", e);
    }
    result.map(|_| ())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tracksim=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
