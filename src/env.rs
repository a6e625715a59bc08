//! Game environment: state transitions, terminal detection, and rewards
//!
//! The environment is pure game mechanics with no learning. It owns a board
//! plus the terminal flag and winner, and exposes the `step` transition used
//! both by the trainer and by the serving-side session.

use crate::tictactoe::{Board, GameOutcome, Player, first_winner};

/// Reward sentinel for a move targeting an occupied cell.
///
/// Illegal moves are signaled through this penalty and an immediate done
/// flag rather than an error, so training episodes treat them as a hard stop.
pub const ILLEGAL_MOVE_PENALTY: f64 = -10.0;

/// Result of one environment transition
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// State key after the move
    pub state: String,
    /// Reward from the moving player's perspective
    pub reward: f64,
    /// Whether the episode is over
    pub done: bool,
}

/// Tic-Tac-Toe environment
#[derive(Debug, Clone)]
pub struct Environment {
    board: Board,
    done: bool,
    winner: Option<GameOutcome>,
}

impl Environment {
    /// Create a fresh environment with an empty board
    pub fn new() -> Self {
        Environment {
            board: Board::new(),
            done: false,
            winner: None,
        }
    }

    /// Create an environment from an existing board, evaluating its
    /// terminal status immediately (used when serving a move request).
    pub fn from_board(board: Board) -> Self {
        let mut env = Environment {
            board,
            done: false,
            winner: None,
        };
        env.check_terminal();
        env
    }

    /// Reinitialize to an empty board and return its state key
    pub fn reset(&mut self) -> String {
        self.board = Board::new();
        self.done = false;
        self.winner = None;
        self.state()
    }

    /// Current state key (the board encoding)
    pub fn state(&self) -> String {
        self.board.encode()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn done(&self) -> bool {
        self.done
    }

    pub fn winner(&self) -> Option<GameOutcome> {
        self.winner
    }

    /// Indices of empty cells; empty only when the board is full
    pub fn available_actions(&self) -> Vec<usize> {
        self.board.empty_positions()
    }

    /// Evaluate the board: a completed line wins (first in enumeration
    /// order), a full board with no line is a draw.
    pub fn check_terminal(&mut self) {
        if let Some(player) = first_winner(&self.board.cells) {
            self.winner = Some(GameOutcome::Win(player));
            self.done = true;
        } else if self.board.is_full() {
            self.winner = Some(GameOutcome::Draw);
            self.done = true;
        }
    }

    /// Reward from `player`'s perspective: +1 win, +0.5 draw, -1 loss,
    /// 0 while the game is still running.
    pub fn reward(&self, player: Player) -> f64 {
        match self.winner {
            Some(GameOutcome::Win(winner)) if winner == player => 1.0,
            Some(GameOutcome::Win(_)) => -1.0,
            Some(GameOutcome::Draw) => 0.5,
            None => 0.0,
        }
    }

    /// Apply a move for `player`.
    ///
    /// A move targeting an occupied (or out-of-bounds) cell leaves the
    /// environment untouched and returns the unchanged state with the
    /// illegal-move penalty and `done = true`.
    pub fn step(&mut self, action: usize, player: Player) -> Transition {
        if !self.board.is_empty(action) {
            return Transition {
                state: self.state(),
                reward: ILLEGAL_MOVE_PENALTY,
                done: true,
            };
        }

        self.board.set(action, player);
        self.check_terminal();

        Transition {
            state: self.state(),
            reward: self.reward(player),
            done: self.done,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_returns_empty_state() {
        let mut env = Environment::new();
        env.step(0, Player::X);
        let state = env.reset();
        assert_eq!(state, ".........");
        assert!(!env.done());
        assert_eq!(env.winner(), None);
    }

    #[test]
    fn test_available_actions_shrink_by_one_per_step() {
        let mut env = Environment::new();
        let mut player = Player::X;

        for expected in (1..=9).rev() {
            assert_eq!(env.available_actions().len(), expected);
            let action = env.available_actions()[0];
            let t = env.step(action, player);
            if t.done {
                break;
            }
            player = player.opponent();
        }
    }

    #[test]
    fn test_step_legal_move() {
        let mut env = Environment::new();
        let t = env.step(4, Player::X);

        assert_eq!(t.state, "....X....");
        assert_eq!(t.reward, 0.0);
        assert!(!t.done);
    }

    #[test]
    fn test_step_winning_move() {
        let mut env = Environment::from_board(Board::from_string("XX.OO....").unwrap());
        let t = env.step(2, Player::X);

        assert!(t.done);
        assert_eq!(t.reward, 1.0);
        assert_eq!(env.winner(), Some(GameOutcome::Win(Player::X)));
    }

    #[test]
    fn test_step_losing_perspective() {
        // O completes a line; from X's perspective that move would score -1
        let mut env = Environment::from_board(Board::from_string("OO.XX....").unwrap());
        let t = env.step(2, Player::O);

        assert!(t.done);
        assert_eq!(t.reward, 1.0);
        assert_eq!(env.reward(Player::X), -1.0);
    }

    #[test]
    fn test_step_illegal_move_penalty() {
        let mut env = Environment::new();
        env.step(4, Player::X);
        let before = env.state();

        let t = env.step(4, Player::O);
        assert_eq!(t.state, before);
        assert_eq!(t.reward, ILLEGAL_MOVE_PENALTY);
        assert!(t.done);

        // The environment itself is untouched by the rejected move
        assert_eq!(env.state(), before);
        assert!(!env.done());
    }

    #[test]
    fn test_step_out_of_bounds_is_illegal() {
        let mut env = Environment::new();
        let t = env.step(9, Player::X);
        assert_eq!(t.reward, ILLEGAL_MOVE_PENALTY);
        assert!(t.done);
        assert_eq!(env.state(), ".........");
    }

    #[test]
    fn test_draw_detection() {
        // XOX / XOO / OXX: full board, no line
        let env = Environment::from_board(Board::from_string("XOXXOOOXX").unwrap());
        assert!(env.done());
        assert_eq!(env.winner(), Some(GameOutcome::Draw));
        assert_eq!(env.reward(Player::X), 0.5);
        assert_eq!(env.reward(Player::O), 0.5);
        assert!(env.available_actions().is_empty());
    }

    #[test]
    fn test_reward_values() {
        let env = Environment::from_board(Board::from_string("XXXOO....").unwrap());
        assert_eq!(env.reward(Player::X), 1.0);
        assert_eq!(env.reward(Player::O), -1.0);

        let running = Environment::new();
        assert_eq!(running.reward(Player::X), 0.0);
        assert_eq!(running.reward(Player::O), 0.0);
    }

    #[test]
    fn test_from_board_detects_existing_win() {
        let env = Environment::from_board(Board::from_string("XXX......").unwrap());
        assert!(env.done());
        assert_eq!(env.winner(), Some(GameOutcome::Win(Player::X)));
    }
}
