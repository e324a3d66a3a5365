//! Flattened game records for offline analysis.
//!
//! Each applied move appends one snapshot: the occupancy vector in
//! column-major square order, then player two's location, then player one's
//! (`-1` while unplaced). A finished record carries the winner. The text
//! encoding is line-oriented so external tooling can consume records without
//! this crate.

use crate::errors::{IsolationError, MoveResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::Player;

/// Location sentinel for a player that has not been placed yet.
pub const UNPLACED: i16 = -1;

/// Flatten one board into a record row.
pub fn flatten_board_state(board: &BoardState) -> Vec<i16> {
    let cells = board.cell_count();
    let mut row = Vec::with_capacity(usize::from(cells) + 2);

    for square in 0..cells {
        row.push(i16::from(board.is_blocked(square)));
    }
    row.push(location_entry(board, Player::Two));
    row.push(location_entry(board, Player::One));

    row
}

#[inline]
fn location_entry(board: &BoardState, player: Player) -> i16 {
    board
        .location(player)
        .map_or(UNPLACED, |square| i16::from(square))
}

/// Ordered per-move snapshots of one game plus the eventual winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub width: u8,
    pub height: u8,
    pub snapshots: Vec<Vec<i16>>,
    pub winner: Option<Player>,
}

impl GameRecord {
    pub fn new(board: &BoardState) -> Self {
        Self {
            width: board.width,
            height: board.height,
            snapshots: Vec::new(),
            winner: None,
        }
    }

    /// Append the state reached after a move.
    pub fn push(&mut self, board: &BoardState) {
        self.snapshots.push(flatten_board_state(board));
    }

    pub fn set_winner(&mut self, winner: Player) {
        self.winner = Some(winner);
    }

    fn row_len(&self) -> usize {
        usize::from(self.width) * usize::from(self.height) + 2
    }

    /// Deterministic text encoding, one snapshot per line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("# knight_isolation game record\n");
        out.push_str(&format!(
            "# date {}\n",
            chrono::Local::now().format("%Y.%m.%d")
        ));
        out.push_str(&format!("width {}\n", self.width));
        out.push_str(&format!("height {}\n", self.height));
        if let Some(winner) = self.winner {
            out.push_str(&format!("winner {}\n", winner.number()));
        }
        for snapshot in &self.snapshots {
            let fields: Vec<String> = snapshot.iter().map(|v| v.to_string()).collect();
            out.push_str(&fields.join(","));
            out.push('\n');
        }
        out
    }

    /// Parse a record produced by [`GameRecord::to_text`].
    pub fn from_text(text: &str) -> MoveResult<Self> {
        let mut width = None;
        let mut height = None;
        let mut winner = None;
        let mut snapshots = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(value) = line.strip_prefix("width ") {
                width = Some(parse_field::<u8>(value, "width")?);
            } else if let Some(value) = line.strip_prefix("height ") {
                height = Some(parse_field::<u8>(value, "height")?);
            } else if let Some(value) = line.strip_prefix("winner ") {
                winner = Some(match value {
                    "1" => Player::One,
                    "2" => Player::Two,
                    other => {
                        return Err(IsolationError::InvalidRecord(format!(
                            "unknown winner '{other}'"
                        )))
                    }
                });
            } else {
                let row: MoveResult<Vec<i16>> = line
                    .split(',')
                    .map(|field| parse_field::<i16>(field, "snapshot entry"))
                    .collect();
                snapshots.push(row?);
            }
        }

        let (Some(width), Some(height)) = (width, height) else {
            return Err(IsolationError::InvalidRecord(
                "missing width or height header".to_owned(),
            ));
        };

        let record = Self {
            width,
            height,
            snapshots,
            winner,
        };
        let expected = record.row_len();
        if let Some(bad) = record.snapshots.iter().find(|row| row.len() != expected) {
            return Err(IsolationError::InvalidRecord(format!(
                "snapshot has {} entries, expected {expected}",
                bad.len()
            )));
        }

        Ok(record)
    }
}

fn parse_field<T: std::str::FromStr>(value: &str, what: &str) -> MoveResult<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| IsolationError::InvalidRecord(format!("unparseable {what}: '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    #[test]
    fn flattened_row_places_locations_last() {
        let mut board = BoardState::new_default();
        let generator = LegalMoveGenerator::for_board(&board);
        let p1 = board.square_at(2, 3).unwrap();
        apply_move(&mut board, &generator, p1).unwrap();

        let row = flatten_board_state(&board);
        assert_eq!(row.len(), 51);
        assert_eq!(row[usize::from(p1)], 1);
        assert_eq!(row.iter().filter(|&&v| v == 1).count(), 1);
        assert_eq!(row[49], UNPLACED); // player two
        assert_eq!(row[50], i16::from(p1)); // player one
    }

    #[test]
    fn record_accumulates_one_snapshot_per_move() {
        let mut board = BoardState::new_default();
        let generator = LegalMoveGenerator::for_board(&board);
        let mut record = GameRecord::new(&board);

        for _ in 0..4 {
            let mv = generator.legal_moves_active(&board)[0];
            apply_move(&mut board, &generator, mv).unwrap();
            record.push(&board);
        }

        assert_eq!(record.snapshots.len(), 4);
        assert_eq!(record.snapshots[3], flatten_board_state(&board));
    }

    #[test]
    fn text_round_trip_preserves_the_record() {
        let mut board = BoardState::new_default();
        let generator = LegalMoveGenerator::for_board(&board);
        let mut record = GameRecord::new(&board);
        for _ in 0..3 {
            let mv = generator.legal_moves_active(&board)[0];
            apply_move(&mut board, &generator, mv).unwrap();
            record.push(&board);
        }
        record.set_winner(Player::Two);

        let decoded = GameRecord::from_text(&record.to_text()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn round_trip_without_winner() {
        let board = BoardState::new_default();
        let record = GameRecord::new(&board);
        let decoded = GameRecord::from_text(&record.to_text()).unwrap();
        assert_eq!(decoded.winner, None);
        assert!(decoded.snapshots.is_empty());
    }

    #[test]
    fn malformed_records_are_rejected() {
        assert!(GameRecord::from_text("width 7\n").is_err());
        assert!(GameRecord::from_text("width 7\nheight 7\nwinner 3\n").is_err());
        assert!(GameRecord::from_text("width 7\nheight 7\n1,2,3\n").is_err());
        assert!(GameRecord::from_text("width x\nheight 7\n").is_err());
    }
}
