use crate::agent::Agent;
use crate::sim::Track;

/// One diagnostic line for the current step of an episode
pub fn describe_step<A: Agent + ?Sized>(track: &Track, agent: &A) -> String {
    format!(
        "t={:>4} s={:>9.4} a={:>3} terminal={} calls={}",
        track.time(),
        agent.state(),
        agent.action(),
        track.is_terminal(agent.state()),
        agent.nb_calls()
    )
}
