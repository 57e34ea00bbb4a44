//! Error types for the engine.
//!
//! Extra turns, captures and game over are ordinary outcomes and show up as
//! fields on the move result. Only rejected requests are errors.

use super::player::Side;

/// Why a sowing request was refused. The board is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("cell {index} is not one of {side}'s pits")]
    NotOwned { side: Side, index: usize },

    #[error("pit {index} is empty")]
    EmptyPit { index: usize },
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    #[error("cell index {index} out of range for a board of {len} cells")]
    OutOfRange { index: usize, len: usize },

    #[error("pit number {pit} out of range (expected 1..={pits_per_side})")]
    PitOutOfRange { pit: usize, pits_per_side: usize },

    #[error("{0} has no legal move")]
    NoLegalMove(Side),

    #[error("it is not {side}'s turn")]
    NotYourTurn { side: Side },

    #[error("the game is over")]
    GameOver,

    #[error("no bot is waiting to move")]
    NoBotToMove,

    #[error("the game is still in progress")]
    GameInProgress,

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that can occur when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),

    #[error("unknown difficulty '{0}' (expected Easy, Medium or Hard)")]
    UnknownDifficulty(String),
}
