//! Terminal-oriented board renderer.
//!
//! Creates a human-readable grid view from the occupancy bitboard for
//! debugging, tests, and diagnostics in text environments. Output is fully
//! deterministic for a given state.

use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::Player;

/// Render the board to a string for terminal output.
///
/// Open cells are blank, blocked cells show `-`, and the players' current
/// squares show `1` and `2`.
pub fn render_board_state(board: &BoardState) -> String {
    let margin = board.height.saturating_sub(1).to_string().len() + 1;
    let mut out = String::new();

    out.push_str(&" ".repeat(margin + 3));
    let header: Vec<String> = (0..board.width).map(|col| col.to_string()).collect();
    out.push_str(&header.join("   "));
    out.push('\n');

    for row in 0..board.height {
        out.push_str(&format!("{:<margin$}", row));
        out.push_str(" | ");
        for col in 0..board.width {
            let square = row + col * board.height;
            out.push(cell_symbol(board, square));
            out.push_str(" | ");
        }
        out.push('\n');
    }

    out
}

fn cell_symbol(board: &BoardState, square: u8) -> char {
    if board.location(Player::One) == Some(square) {
        return '1';
    }
    if board.location(Player::Two) == Some(square) {
        return '2';
    }
    if board.is_blocked(square) {
        return '-';
    }
    ' '
}
