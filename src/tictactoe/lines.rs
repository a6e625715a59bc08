//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Find the winner, if any, scanning the lines in enumeration order.
///
/// The first completed line decides the winner. Well-formed games can never
/// complete two lines for different players, so the ordering only matters for
/// malformed input.
pub fn first_winner(cells: &[Cell; 9]) -> Option<Player> {
    for line in &WINNING_LINES {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
            return match first {
                Cell::X => Some(Player::X),
                Cell::O => Some(Player::O),
                Cell::Empty => unreachable!(),
            };
        }
    }
    None
}
