//! Q-table mapping board states to per-action values

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Q-table: state key -> array of 9 action values
///
/// Entries are created explicitly through [`ensure`](QTable::ensure); reads
/// of unseen states observe zeros without inserting anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    values: HashMap<String, [f64; 9]>,
}

impl QTable {
    /// Create an empty Q-table
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an all-zero entry for `state` if it is not present yet
    pub fn ensure(&mut self, state: &str) {
        if !self.values.contains_key(state) {
            self.values.insert(state.to_string(), [0.0; 9]);
        }
    }

    /// Action values for a state, zeros if the state has never been seen
    pub fn action_values(&self, state: &str) -> [f64; 9] {
        self.values.get(state).copied().unwrap_or([0.0; 9])
    }

    /// Maximum value over all 9 action slots of a state
    ///
    /// The maximum deliberately ranges over every slot, legal or not,
    /// matching the update target of the training loop.
    pub fn max_value(&self, state: &str) -> f64 {
        self.action_values(state)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Highest-valued action among `legal`, ties broken by the first index
    /// encountered in the left-to-right scan.
    ///
    /// Returns `None` when `legal` is empty.
    pub fn greedy_action(&self, state: &str, legal: &[usize]) -> Option<usize> {
        let values = self.action_values(state);
        let mut best: Option<(usize, f64)> = None;
        for &action in legal {
            let value = values[action];
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((action, value)),
            }
        }
        best.map(|(action, _)| action)
    }

    /// Q-learning update: Q(s,a) += α[r + γ max Q(s') − Q(s,a)]
    pub fn q_learning_update(
        &mut self,
        state: &str,
        action: usize,
        reward: f64,
        next_state: &str,
        alpha: f64,
        gamma: f64,
    ) {
        let max_next = self.max_value(next_state);
        self.ensure(state);
        let entry = self
            .values
            .get_mut(state)
            .expect("entry exists after ensure");
        let current = entry[action];
        entry[action] = current + alpha * (reward + gamma * max_next - current);
    }

    /// Number of states with an entry
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over stored state keys
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_state_reads_zeros() {
        let table = QTable::new();
        assert_eq!(table.action_values("........."), [0.0; 9]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_ensure_inserts_once() {
        let mut table = QTable::new();
        table.ensure(".........");
        table.ensure(".........");
        assert_eq!(table.len(), 1);
        assert_eq!(table.action_values("........."), [0.0; 9]);
    }

    #[test]
    fn test_greedy_action_picks_highest_legal() {
        let mut table = QTable::new();
        table.ensure("X........");
        table.q_learning_update("X........", 1, 1.5, "ignored", 1.0, 0.0);
        table.q_learning_update("X........", 2, 0.8, "ignored", 1.0, 0.0);

        assert_eq!(table.greedy_action("X........", &[1, 2, 3]), Some(1));
    }

    #[test]
    fn test_greedy_action_tie_break_is_first_legal_index() {
        let table = QTable::new();
        // All zeros: the first legal action wins the tie
        assert_eq!(table.greedy_action(".........", &[3, 5, 7]), Some(3));
        assert_eq!(table.greedy_action(".........", &[0, 1]), Some(0));
    }

    #[test]
    fn test_greedy_action_empty_legal_set() {
        let table = QTable::new();
        assert_eq!(table.greedy_action(".........", &[]), None);
    }

    #[test]
    fn test_greedy_ignores_illegal_slots() {
        let mut table = QTable::new();
        table.q_learning_update("s", 0, 100.0, "t", 1.0, 0.0);
        // Slot 0 has the highest value but is not legal
        assert_eq!(table.greedy_action("s", &[1, 2]), Some(1));
    }

    #[test]
    fn test_max_value_over_all_slots() {
        let mut table = QTable::new();
        table.q_learning_update("s", 7, 2.0, "t", 1.0, 0.0);
        assert_eq!(table.max_value("s"), 2.0);
        assert_eq!(table.max_value("unseen"), 0.0);
    }

    #[test]
    fn test_q_learning_update_arithmetic() {
        let mut table = QTable::new();
        table.q_learning_update("next", 2, 2.0, "terminal", 1.0, 0.0);

        // Q(s,4) = 0 + 0.5 * (1.0 + 0.9 * 2.0 - 0) = 1.4
        table.q_learning_update("s", 4, 1.0, "next", 0.5, 0.9);
        let updated = table.action_values("s")[4];
        assert!((updated - 1.4).abs() < 1e-12);

        // Second update moves halfway toward the same target
        table.q_learning_update("s", 4, 1.0, "next", 0.5, 0.9);
        let updated = table.action_values("s")[4];
        assert!((updated - 2.1).abs() < 1e-12);
    }

    #[test]
    fn test_update_creates_state_entry() {
        let mut table = QTable::new();
        table.q_learning_update("fresh", 0, 0.5, "other", 0.5, 0.9);
        assert_eq!(table.len(), 1);
        assert!(table.states().any(|s| s == "fresh"));
    }
}
