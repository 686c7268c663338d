//! Open-Loop UCT Planner
//!
//! Tree nodes stand for action sequences taken from the current position, not
//! for states: every iteration resamples the positions along its path through
//! the model. Each model transition counts as one policy evaluation.
//!
//! Per decision:
//! 1. `budget` iterations descend the tree, trying every action of a node
//!    once before switching to UCB1 (`Q + c * sqrt(ln N / n)`)
//! 2. A newly expanded leaf is valued by a uniformly random rollout cut at
//!    `horizon`
//! 3. Discounted returns are averaged back into the edges of the path
//! 4. The action with the best mean return is taken, or a uniformly random
//!    one with probability `epsilon`

use super::{Agent, Model, PolicyParameters};
use crate::sim::numeric::is_less_than;
use crate::sim::RandomSource;

#[derive(Debug, Clone, Default)]
struct Edge {
    visits: u32,
    /// Running mean of the discounted returns seen through this edge
    value: f64,
    child: Option<usize>,
}

#[derive(Debug, Clone)]
struct Node {
    visits: u32,
    edges: Vec<Edge>,
}

impl Node {
    fn new(nb_actions: usize) -> Self {
        Self {
            visits: 0,
            edges: vec![Edge::default(); nb_actions],
        }
    }
}

/// Arena of nodes; indices stay valid until the next `clear` or `reroot`
#[derive(Debug, Clone, Default)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Keep only the subtree under `root`, renumbered breadth-first so the
    /// new root sits at index 0. Returns the new root index.
    fn reroot(&mut self, root: usize) -> usize {
        let mut old = std::mem::take(&mut self.nodes);
        let mut order = vec![root];
        let mut next = 0;
        while next < order.len() {
            let children: Vec<usize> = old[order[next]]
                .edges
                .iter()
                .filter_map(|e| e.child)
                .collect();
            order.extend(children);
            next += 1;
        }

        let mut remap = vec![usize::MAX; old.len()];
        for (new_idx, &old_idx) in order.iter().enumerate() {
            remap[old_idx] = new_idx;
        }
        self.nodes = order
            .iter()
            .map(|&old_idx| {
                let mut node = std::mem::replace(&mut old[old_idx], Node::new(0));
                for edge in &mut node.edges {
                    edge.child = edge.child.map(|c| remap[c]);
                }
                node
            })
            .collect();
        0
    }

    fn push(&mut self, nb_actions: usize) -> usize {
        self.nodes.push(Node::new(nb_actions));
        self.nodes.len() - 1
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Index of the first maximum
fn argmax(values: impl Iterator<Item = f64>) -> usize {
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (i, value) in values.enumerate() {
        if value > best_value {
            best = i;
            best_value = value;
        }
    }
    best
}

/// Planning agent driven by open-loop UCT over a [`Model`]
#[derive(Debug, Clone)]
pub struct UctAgent {
    s: f64,
    a: i32,
    params: PolicyParameters,
    model: Model,
    tree: Tree,
    /// Subtree under the last taken action, kept when `reuse` is set
    next_root: Option<usize>,
    nb_calls: u64,
}

impl UctAgent {
    pub fn new(init_s: f64, params: PolicyParameters, model: Model) -> Self {
        Self {
            s: init_s,
            a: params.action_space.first().copied().unwrap_or_default(),
            params,
            model,
            tree: Tree::default(),
            next_root: None,
            nb_calls: 0,
        }
    }

    /// Run the search from the current position and return the chosen
    /// action index
    fn plan(&mut self, rng: &mut RandomSource) -> usize {
        let nb_actions = self.params.nb_actions();
        let root = match self.next_root.take() {
            Some(root) if self.params.reuse => self.tree.reroot(root),
            _ => {
                self.tree.clear();
                self.tree.push(nb_actions)
            }
        };

        for _ in 0..self.params.budget {
            self.simulate(root, self.s, 0, rng);
        }

        let explore = is_less_than(rng.uniform(0.0, 1.0), self.params.epsilon);
        let k = if explore || self.tree.nodes[root].visits == 0 {
            rng.index(nb_actions)
        } else {
            self.greedy(root)
        };

        self.next_root = self.tree.nodes[root].edges[k].child;
        k
    }

    /// One descent from `node` at sampled position `s`; returns the
    /// discounted return observed from this node on
    fn simulate(&mut self, node: usize, s: f64, depth: u32, rng: &mut RandomSource) -> f64 {
        if depth >= self.params.horizon {
            return 0.0;
        }

        let k = self.select(node);
        let next = self.model.transition(s, self.params.action_space[k], rng);
        self.nb_calls += 1;

        let mut q = self.model.reward(next);
        if !self.model.is_terminal(next) {
            let future = match self.tree.nodes[node].edges[k].child {
                Some(child) => self.simulate(child, next, depth + 1, rng),
                None => {
                    let child = self.tree.push(self.params.nb_actions());
                    self.tree.nodes[node].edges[k].child = Some(child);
                    self.rollout(next, depth + 1, rng)
                }
            };
            q += self.params.discount_factor * future;
        }

        let node = &mut self.tree.nodes[node];
        node.visits += 1;
        let edge = &mut node.edges[k];
        edge.visits += 1;
        edge.value += (q - edge.value) / f64::from(edge.visits);
        q
    }

    /// Uniformly random default policy from `depth` to the horizon
    fn rollout(&mut self, mut s: f64, depth: u32, rng: &mut RandomSource) -> f64 {
        let nb_actions = self.params.nb_actions();
        let mut total = 0.0;
        let mut discount = 1.0;

        for _ in depth..self.params.horizon {
            let a = self.params.action_space[rng.index(nb_actions)];
            s = self.model.transition(s, a, rng);
            self.nb_calls += 1;
            total += discount * self.model.reward(s);
            if self.model.is_terminal(s) {
                break;
            }
            discount *= self.params.discount_factor;
        }
        total
    }

    /// Untried actions first, then UCB1
    fn select(&self, node: usize) -> usize {
        let node = &self.tree.nodes[node];
        if let Some(k) = node.edges.iter().position(|e| e.visits == 0) {
            return k;
        }

        let ln_n = f64::from(node.visits).ln();
        let c = self.params.uct_cst;
        argmax(
            node.edges
                .iter()
                .map(|e| e.value + c * (ln_n / f64::from(e.visits)).sqrt()),
        )
    }

    /// Best mean return among visited actions
    fn greedy(&self, node: usize) -> usize {
        argmax(self.tree.nodes[node].edges.iter().map(|e| {
            if e.visits == 0 {
                f64::NEG_INFINITY
            } else {
                e.value
            }
        }))
    }
}

impl Agent for UctAgent {
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
        if self.params.action_space.is_empty() {
            return;
        }
        let k = self.plan(rng);
        self.a = self.params.action_space[k];
    }

    fn nb_calls(&self) -> u64 {
        self.nb_calls
    }
}
