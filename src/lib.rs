pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod persistence;
pub mod sim;

pub use agent::{build_agent, Agent, Model, PolicyParameters, RandomAgent, UctAgent};
pub use config::{PolicyConfig, SimParameters, TrackConfig};
pub use error::{Result, TrackSimError};
pub use persistence::{backup_path, initialize_backup, save_matrix, save_vector, WriteMode};
pub use sim::{
    run_with, run_with_agents, simulate_episode, EpisodeRecord, RandomSource, Track,
    TrackDynamics,
};
