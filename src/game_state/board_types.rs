/// Core value types shared by the board model, move generation, and search.
///
/// Cell indexing is column-major: `square = row + col * height`. This matches
/// the flattened layout used by exported game records, so a square index can
/// be written straight into a record without translation.

pub use crate::game_state::board_state::BoardState;

/// Board square index (`0..width*height`).
pub type Square = u8;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Display number (`1` or `2`), used by the renderer and game records.
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}
