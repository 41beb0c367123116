//! Error types for the engine crate

use thiserror::Error;

use crate::board::Pos;

/// Main error type for the engine crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The requested position is not an available empty cell.
    #[error("invalid move: {pos} is not an empty cell")]
    InvalidMove { pos: Pos },

    /// The game cannot continue from the current position: either the
    /// position is a proven forced outcome or the board has no empty cell.
    #[error("game already over")]
    GameOver,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
