//! Interactive terminal engine.
//!
//! Renders the board, lists the legal destinations with their row/column
//! coordinates, and reads the chosen index from standard input. Meant to be
//! run with an unlimited turn clock.

use std::io::{BufRead, Write};

use crate::engines::engine_trait::{Engine, EngineOutput, TurnClock};
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::Square;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::utils::render_board_state::render_board_state;

pub struct HumanEngine;

impl HumanEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HumanEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for HumanEngine {
    fn name(&self) -> &str {
        "Isolation Human"
    }

    fn choose_move(
        &mut self,
        board: &BoardState,
        _clock: &TurnClock,
    ) -> Result<EngineOutput, String> {
        let generator = LegalMoveGenerator::for_board(board);
        let legal_moves = generator.legal_moves_active(board);

        let mut out = EngineOutput::default();
        if legal_moves.is_empty() {
            return Ok(out);
        }

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let chosen = prompt_for_move(
            board,
            &legal_moves,
            &mut stdin.lock(),
            &mut stdout.lock(),
        )
        .map_err(|e| e.to_string())?;

        out.best_move = Some(chosen);
        Ok(out)
    }
}

/// Prompt until the reader supplies a valid move index.
fn prompt_for_move<R: BufRead, W: Write>(
    board: &BoardState,
    legal_moves: &[Square],
    reader: &mut R,
    writer: &mut W,
) -> std::io::Result<Square> {
    writeln!(writer, "{}", render_board_state(board))?;

    let menu: Vec<String> = legal_moves
        .iter()
        .enumerate()
        .map(|(i, &mv)| format!("[{}] ({}, {})", i, board.row_of(mv), board.col_of(mv)))
        .collect();
    writeln!(writer, "{}", menu.join("\t"))?;

    loop {
        write!(writer, "Select move index: ")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed before a move was chosen",
            ));
        }

        match line.trim().parse::<usize>() {
            Ok(index) if index < legal_moves.len() => return Ok(legal_moves[index]),
            Ok(_) => writeln!(writer, "Illegal move! Try again.")?,
            Err(_) => writeln!(writer, "Invalid index! Try again.")?,
        }
    }
}
