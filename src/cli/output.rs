//! Output formatting for CLI commands

use crate::{q_learning::TrainingStats, tictactoe::Board};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n=== {title} ===");
}

/// Print the outcome counts of a training run
pub fn print_training_stats(stats: &TrainingStats) {
    println!("Episodes: {}", stats.episodes);
    println!("Wins: {} ({:.1}%)", stats.wins, stats.win_rate * 100.0);
    println!("Draws: {} ({:.1}%)", stats.draws, stats.draw_rate * 100.0);
    println!("Losses: {} ({:.1}%)", stats.losses, stats.loss_rate * 100.0);
}

/// Render the board as a 3x3 grid with cell indices for empty squares
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let pos = row * 3 + col;
            let c = if board.is_empty(pos) {
                char::from_digit(pos as u32, 10).expect("pos < 9")
            } else {
                board.get(pos).to_char()
            };
            out.push(' ');
            out.push(c);
            if col < 2 {
                out.push_str(" |");
            }
        }
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board_shows_indices_for_empty_cells() {
        let board = Board::from_string("X...O....").unwrap();
        let rendered = render_board(&board);

        assert!(rendered.contains(" X | 1 | 2"));
        assert!(rendered.contains(" 3 | O | 5"));
        assert!(rendered.contains(" 6 | 7 | 8"));
    }
}
