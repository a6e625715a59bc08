//! Train command - Run the Q-learning loop and persist the value table

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};

use crate::{
    cli::output,
    q_learning::{DEFAULT_TABLE_FILE, QTable, TableStore, Trainer, TrainingConfig},
};

#[derive(Parser, Debug)]
#[command(about = "Train the agent against a random opponent")]
pub struct TrainArgs {
    /// Number of training episodes
    #[arg(long, short = 'e', default_value_t = 10_000)]
    pub episodes: usize,

    /// Learning rate α (0.0-1.0)
    #[arg(long, default_value_t = 0.5)]
    pub alpha: f64,

    /// Discount factor γ (0.0-1.0)
    #[arg(long, default_value_t = 0.9)]
    pub gamma: f64,

    /// Exploration rate ε (0.0-1.0)
    #[arg(long, default_value_t = 0.1)]
    pub epsilon: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file for the learned value table
    #[arg(long, short = 'O', default_value = DEFAULT_TABLE_FILE)]
    pub output: PathBuf,

    /// Continue from an existing table instead of starting from scratch
    #[arg(long, default_value_t = false)]
    pub resume: bool,

    /// Show progress bar (pass `--progress false` to disable)
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    pub progress: bool,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let store = TableStore::new(&args.output);

    let mut table = if args.resume {
        store.try_load()?.unwrap_or_default()
    } else {
        QTable::new()
    };

    let config = TrainingConfig {
        episodes: args.episodes,
        alpha: args.alpha,
        gamma: args.gamma,
        epsilon: args.epsilon,
        seed: args.seed,
        progress: args.progress,
    };

    let stats = Trainer::new(config).run(&mut table)?;

    output::print_section("Training Complete");
    output::print_training_stats(&stats);

    store.save(&table)?;
    println!("\nValue table saved to: {}", store.path().display());
    println!("  Stored states: {}", table.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_defaults_on_and_can_be_disabled() {
        let args = TrainArgs::parse_from(["train"]);
        assert!(args.progress);

        let args = TrainArgs::parse_from(["train", "--progress", "false"]);
        assert!(!args.progress);

        let args = TrainArgs::parse_from(["train", "--progress", "true"]);
        assert!(args.progress);
    }

    #[test]
    fn test_hyperparameter_defaults() {
        let args = TrainArgs::parse_from(["train"]);
        assert_eq!(args.episodes, 10_000);
        assert_eq!(args.alpha, 0.5);
        assert_eq!(args.gamma, 0.9);
        assert_eq!(args.epsilon, 0.1);
        assert_eq!(args.seed, None);
    }
}
