//! Epsilon-greedy action selection

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{error::Result, q_learning::q_table::QTable};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Epsilon-greedy policy over a Q-table
///
/// With probability ε a uniformly random legal action is explored; otherwise
/// the policy exploits the highest-valued legal action (stable argmax, first
/// index wins ties). Greedy serving is the ε = 0 special case.
#[derive(Debug)]
pub struct Policy {
    epsilon: f64,
    rng: StdRng,
}

impl Policy {
    /// Create a policy with the given exploration rate
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            rng: build_rng(None),
        }
    }

    /// Create a fully greedy policy (ε = 0)
    pub fn greedy() -> Self {
        Self::new(0.0)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Select an action for `state` among `legal` actions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`](crate::Error::NoValidMoves) when
    /// `legal` is empty; callers must not ask for a move in a terminal or
    /// full position.
    pub fn select(&mut self, table: &QTable, state: &str, legal: &[usize]) -> Result<usize> {
        if legal.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }

        if self.rng.random::<f64>() < self.epsilon {
            // Explore: uniform over legal actions
            Ok(*legal.choose(&mut self.rng).expect("legal is non-empty"))
        } else {
            // Exploit: stable argmax over the legal scan
            Ok(table
                .greedy_action(state, legal)
                .expect("legal is non-empty"))
        }
    }

    /// Pick a uniformly random legal action (the random-opponent move)
    pub fn random(&mut self, legal: &[usize]) -> Result<usize> {
        legal
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoValidMoves)
    }
}
