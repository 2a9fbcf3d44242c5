// Tests for the search and evaluation modules
//
// `TreeGame` is an explicit game tree implementing `GameState`, so search
// properties can be checked on hand-built and randomly generated trees as well
// as on real Isolation positions.

use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agent::ai::Evaluator;
use crate::game_repr::{GameState, PlayerId};


pub struct Node {
    pub children: Vec<usize>,
    /// Utility at leaves, heuristic estimate elsewhere; first player's perspective
    pub value: f64,
}

#[derive(Clone)]
pub struct TreeGame {
    nodes: Rc<Vec<Node>>,
    node: usize,
    ply: u32,
}

impl TreeGame {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            nodes: Rc::new(nodes),
            node: 0,
            ply: 0,
        }
    }

    /// Root whose children are leaves with the given values
    pub fn leaves(values: &[f64]) -> Self {
        let mut nodes = vec![Node {
            children: (1..=values.len()).collect(),
            value: 0.0,
        }];
        nodes.extend(values.iter().map(|&value| Node {
            children: Vec::new(),
            value,
        }));
        Self::new(nodes)
    }

    /// Two-level tree: root -> min nodes -> leaves
    pub fn two_level(groups: &[&[f64]]) -> Self {
        let mut nodes = vec![Node {
            children: Vec::new(),
            value: 0.0,
        }];

        for group in groups {
            let parent = nodes.len();
            nodes[0].children.push(parent);
            nodes.push(Node {
                children: Vec::new(),
                value: 0.0,
            });
            for &value in group.iter() {
                let leaf = nodes.len();
                nodes[parent].children.push(leaf);
                nodes.push(Node {
                    children: Vec::new(),
                    value,
                });
            }
        }

        Self::new(nodes)
    }

    /// Random tree with small integer values so that ties are common
    pub fn random(seed: u64, max_depth: u32, max_branching: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut nodes = Vec::new();
        grow(&mut nodes, &mut rng, max_depth, max_branching);
        Self::new(nodes)
    }

    fn current(&self) -> &Node {
        &self.nodes[self.node]
    }
}

fn grow(nodes: &mut Vec<Node>, rng: &mut StdRng, depth: u32, max_branching: usize) -> usize {
    let idx = nodes.len();
    nodes.push(Node {
        children: Vec::new(),
        value: rng.gen_range(-5..=5) as f64,
    });

    if depth > 0 {
        // Roots always branch so that every tree has a decision to make
        let min_branching = if idx == 0 { 1 } else { 0 };
        let branching = rng.gen_range(min_branching..=max_branching);
        for _ in 0..branching {
            let child = grow(nodes, rng, depth - 1, max_branching);
            nodes[idx].children.push(child);
        }
    }

    idx
}

impl GameState for TreeGame {
    type Action = usize;

    fn actions(&self) -> Vec<usize> {
        (0..self.current().children.len()).collect()
    }

    fn result(&self, action: usize) -> Self {
        Self {
            nodes: Rc::clone(&self.nodes),
            node: self.current().children[action],
            ply: self.ply + 1,
        }
    }

    fn is_terminal(&self) -> bool {
        self.current().children.is_empty()
    }

    fn utility(&self, player: PlayerId) -> f64 {
        if !self.is_terminal() {
            return 0.0;
        }
        match player {
            PlayerId::First => self.current().value,
            PlayerId::Second => -self.current().value,
        }
    }

    fn player(&self) -> PlayerId {
        PlayerId::from_ply(self.ply)
    }
}

/// Reads the stored value of interior nodes
pub struct NodeValue;

impl Evaluator<TreeGame> for NodeValue {
    fn evaluate(&self, state: &TreeGame, player: PlayerId) -> f64 {
        match player {
            PlayerId::First => state.current().value,
            PlayerId::Second => -state.current().value,
        }
    }
}
