use std::error::Error;
use std::fmt;

use crate::game_state::board_types::{Player, Square};

/// Crate-wide result alias for board and move-generation operations.
pub type MoveResult<T> = Result<T, IsolationError>;

/// Represents all possible error types that can occur in the isolation engine.
/// Used throughout the codebase for error handling and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsolationError {
    /// Indicates an attempted access outside the bounds of the board.
    OutOfBounds,
    /// The requested board geometry cannot be represented (zero-sized, or
    /// more cells than the occupancy bitboard can hold).
    InvalidGeometry { width: u8, height: u8 },
    /// A move was attempted that is not in the current legal-move set.
    IllegalMove { player: Player, attempted: Square },
    /// A serialized game record could not be parsed.
    InvalidRecord(String),
}

impl fmt::Display for IsolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsolationError::OutOfBounds => write!(f, "square index outside the board"),
            IsolationError::InvalidGeometry { width, height } => {
                write!(f, "unsupported board geometry {width}x{height}")
            }
            IsolationError::IllegalMove { player, attempted } => {
                write!(
                    f,
                    "player {} attempted illegal move to square {attempted}",
                    player.number()
                )
            }
            IsolationError::InvalidRecord(msg) => write!(f, "invalid game record: {msg}"),
        }
    }
}

impl Error for IsolationError {}
