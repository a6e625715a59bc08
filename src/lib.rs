//! Tabular Q-learning agent for Tic-Tac-Toe
//!
//! This crate provides:
//! - A Tic-Tac-Toe environment with reward computation
//! - An epsilon-greedy policy over a lazily grown Q-table
//! - A fixed-budget training loop against a random opponent
//! - Durable persistence of the learned value table
//! - A session type exposing the move/query interface used by front-ends

pub mod cli;
pub mod env;
pub mod error;
pub mod q_learning;
pub mod session;
pub mod tictactoe;

pub use env::{Environment, ILLEGAL_MOVE_PENALTY, Transition};
pub use error::{Error, Result};
pub use q_learning::{Policy, QTable, TableStore, Trainer, TrainingConfig, TrainingStats};
pub use session::{GameSession, MoveResponse};
pub use tictactoe::{Board, Cell, GameOutcome, Player};
