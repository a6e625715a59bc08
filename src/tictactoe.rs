//! Tic-Tac-Toe board representation and winning-line analysis

pub mod board;
pub mod lines;

pub use board::{Board, Cell, GameOutcome, Player};
pub use lines::{WINNING_LINES, first_winner};
