//! Core board state representation.
//!
//! `BoardState` is the central model for the engine. It stores the blocked
//! cell bitboard, both player locations, the active player, and the move
//! counter used by the match harness and search bookkeeping.

use crate::errors::{IsolationError, MoveResult};
use crate::game_state::board_types::{Player, Square};

/// Canonical board geometry.
pub const DEFAULT_WIDTH: u8 = 7;
pub const DEFAULT_HEIGHT: u8 = 7;

/// One point in an isolation game.
///
/// Occupancy is a single `u64` bitboard, one bit per cell, which caps the
/// supported geometry at 64 cells. Blocked bits only ever transition from
/// clear to set; a cell never reopens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub width: u8,
    pub height: u8,
    pub blocked: u64,
    pub locations: [Option<Square>; 2],
    pub active_player: Player,
    pub move_count: u16,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            blocked: 0,
            locations: [None, None],
            active_player: Player::One,
            move_count: 0,
        }
    }
}

impl BoardState {
    /// Empty canonical 7x7 board, player one to move.
    #[inline]
    pub fn new_default() -> Self {
        Self::default()
    }

    /// Empty board with caller-provided geometry.
    pub fn new(width: u8, height: u8) -> MoveResult<Self> {
        let cells = u16::from(width) * u16::from(height);
        if width == 0 || height == 0 || cells > 64 {
            return Err(IsolationError::InvalidGeometry { width, height });
        }
        Ok(Self {
            width,
            height,
            ..Self::default()
        })
    }

    #[inline]
    pub fn cell_count(&self) -> u8 {
        self.width * self.height
    }

    /// Bitmask with one set bit per board cell.
    #[inline]
    pub fn full_mask(&self) -> u64 {
        let cells = u32::from(self.cell_count());
        if cells >= 64 {
            u64::MAX
        } else {
            (1u64 << cells) - 1
        }
    }

    /// Bitmask of cells that are still open.
    #[inline]
    pub fn open_mask(&self) -> u64 {
        self.full_mask() & !self.blocked
    }

    #[inline]
    pub fn blocked_count(&self) -> u32 {
        self.blocked.count_ones()
    }

    #[inline]
    pub fn is_blocked(&self, square: Square) -> bool {
        (self.blocked >> square) & 1 != 0
    }

    #[inline]
    pub fn location(&self, player: Player) -> Option<Square> {
        self.locations[player.index()]
    }

    #[inline]
    pub fn inactive_player(&self) -> Player {
        self.active_player.opponent()
    }

    /// Column-major square index for a row/column pair.
    #[inline]
    pub fn square_at(&self, row: u8, col: u8) -> MoveResult<Square> {
        if row >= self.height || col >= self.width {
            return Err(IsolationError::OutOfBounds);
        }
        Ok(row + col * self.height)
    }

    #[inline]
    pub fn row_of(&self, square: Square) -> u8 {
        square % self.height
    }

    #[inline]
    pub fn col_of(&self, square: Square) -> u8 {
        square / self.height
    }

    /// Number of players that have been placed on the board.
    #[inline]
    pub fn placed_players(&self) -> u32 {
        self.locations.iter().filter(|loc| loc.is_some()).count() as u32
    }
}
