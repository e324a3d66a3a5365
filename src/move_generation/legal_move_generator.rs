//! Legal move generation and terminal-state classification.
//!
//! A destination is legal when it is reachable from the mover's current
//! square by the fixed knight pattern, lies on the board, and is unblocked.
//! An unplaced player may move to any open cell. Enumeration order is
//! ascending square index; search tie-breaking relies on this being stable.

use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Player, Square};
use crate::move_generation::knight_moves::KnightAttackTable;

pub struct LegalMoveGenerator {
    attack_table: KnightAttackTable,
}

impl LegalMoveGenerator {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            attack_table: KnightAttackTable::new(width, height),
        }
    }

    /// Generator sized for the given board's geometry.
    pub fn for_board(board: &BoardState) -> Self {
        Self::new(board.width, board.height)
    }

    /// Bitmask of legal destinations for `player`.
    #[inline]
    pub fn legal_move_mask(&self, board: &BoardState, player: Player) -> u64 {
        match board.location(player) {
            Some(square) => self.attack_table.attacks(square) & board.open_mask(),
            None => board.open_mask(),
        }
    }

    /// Legal destinations for `player` in ascending square order.
    pub fn legal_moves(&self, board: &BoardState, player: Player) -> Vec<Square> {
        let mut mask = self.legal_move_mask(board, player);
        let mut moves = Vec::with_capacity(mask.count_ones() as usize);

        while mask != 0 {
            moves.push(mask.trailing_zeros() as Square);
            mask &= mask - 1;
        }

        moves
    }

    /// Legal destinations for the active player.
    #[inline]
    pub fn legal_moves_active(&self, board: &BoardState) -> Vec<Square> {
        self.legal_moves(board, board.active_player)
    }

    #[inline]
    pub fn has_any_move(&self, board: &BoardState, player: Player) -> bool {
        self.legal_move_mask(board, player) != 0
    }

    /// True when the active player has no legal moves.
    #[inline]
    pub fn is_terminal(&self, board: &BoardState) -> bool {
        !self.has_any_move(board, board.active_player)
    }

    /// `player` has lost: it is on move and cannot move.
    #[inline]
    pub fn is_loser(&self, board: &BoardState, player: Player) -> bool {
        board.active_player == player && !self.has_any_move(board, player)
    }

    /// `player` has won: the opponent is on move and cannot move.
    #[inline]
    pub fn is_winner(&self, board: &BoardState, player: Player) -> bool {
        board.active_player == player.opponent() && !self.has_any_move(board, player.opponent())
    }

    /// The player with moves remaining, once the game is over.
    pub fn winner(&self, board: &BoardState) -> Option<Player> {
        if self.is_terminal(board) {
            Some(board.inactive_player())
        } else {
            None
        }
    }

    /// The player out of moves, once the game is over.
    pub fn loser(&self, board: &BoardState) -> Option<Player> {
        if self.is_terminal(board) {
            Some(board.active_player)
        } else {
            None
        }
    }
}
