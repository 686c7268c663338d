//! Episode Simulation
//!
//! The track environment, the random source it draws from, and the drivers
//! that run agents against it one episode or one batch at a time.

pub mod batch;
pub mod display;
pub mod episode;
pub mod numeric;
pub mod random;
pub mod track;

pub use batch::{run_with, run_with_agents};
pub use display::describe_step;
pub use episode::{simulate_episode, EpisodeRecord};
pub use random::RandomSource;
pub use track::{Track, TrackDynamics};
