//! Tabular Q-learning: value table, action selection, training, persistence
//!
//! The learner plays X against a uniformly random O opponent and updates a
//! state-keyed table of 9 action values with the off-policy TD rule
//! Q(s,a) ← Q(s,a) + α[r + γ max Q(s') − Q(s,a)].

pub mod policy;
pub mod q_table;
pub mod serialization;
pub mod trainer;

pub use policy::Policy;
pub use q_table::QTable;
pub use serialization::{DEFAULT_TABLE_FILE, TableStore};
pub use trainer::{Trainer, TrainingConfig, TrainingStats};
