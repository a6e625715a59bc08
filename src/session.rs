//! Serving-side game session: the move/query interface for front-ends
//!
//! Front-ends (web handler, interactive UI) own a `GameSession` per game and
//! drive it with human moves; the session answers each one with the agent's
//! greedy counter-move from a trained Q-table. The human plays O, the agent
//! plays X.

use serde::{Deserialize, Serialize};

use crate::{
    env::Environment,
    error::Result,
    q_learning::QTable,
    tictactoe::{Board, GameOutcome, Player},
};

/// Mark placed by the learned agent
pub const AGENT: Player = Player::X;
/// Mark placed by the human
pub const HUMAN: Player = Player::O;

/// Result of one move request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Board after the human move and the agent's reply (if any)
    pub board: Board,
    /// Winner, when the game is over ("X", "O", or "Draw")
    pub winner: Option<GameOutcome>,
    /// Whether the game is over
    pub done: bool,
}

/// One game between a human and the agent
///
/// Created on game start, mutated by alternating human/agent moves,
/// discarded (or [`reset`](GameSession::reset)) when the game is over.
#[derive(Debug, Clone)]
pub struct GameSession {
    env: Environment,
}

impl GameSession {
    /// Start a session on an empty board
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Start a session from an existing board, evaluating its terminal
    /// status (the stateless web-request path).
    pub fn from_board(board: Board) -> Self {
        Self {
            env: Environment::from_board(board),
        }
    }

    /// Discard the current game and start over on an empty board
    pub fn reset(&mut self) {
        self.env.reset();
    }

    pub fn board(&self) -> &Board {
        self.env.board()
    }

    pub fn done(&self) -> bool {
        self.env.done()
    }

    pub fn winner(&self) -> Option<GameOutcome> {
        self.env.winner()
    }

    /// Snapshot of the current position as a move response
    pub fn response(&self) -> MoveResponse {
        MoveResponse {
            board: *self.env.board(),
            winner: self.env.winner(),
            done: self.env.done(),
        }
    }

    /// Let the agent open the game with a greedy move on the empty board.
    ///
    /// Does nothing unless the board is empty.
    pub fn agent_opening(&mut self, table: &QTable) -> Result<()> {
        if self.env.available_actions().len() == 9 {
            self.agent_move(table)?;
        }
        Ok(())
    }

    /// Apply one human move and, when the game continues, the agent's
    /// greedy reply.
    ///
    /// A request on a finished game or against an occupied cell leaves the
    /// position unchanged; the returned response simply reports the current
    /// board and outcome.
    pub fn play_round(&mut self, pos: usize, table: &QTable) -> Result<MoveResponse> {
        if self.env.done() || !self.env.board().is_empty(pos) {
            return Ok(self.response());
        }

        self.env.step(pos, HUMAN);
        if !self.env.done() {
            self.agent_move(table)?;
        }

        Ok(self.response())
    }

    fn agent_move(&mut self, table: &QTable) -> Result<()> {
        let legal = self.env.available_actions();
        let action = table
            .greedy_action(&self.env.state(), &legal)
            .ok_or(crate::Error::NoValidMoves)?;
        self.env.step(action, AGENT);
        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
