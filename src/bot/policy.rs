//! Bot move selection.
//!
//! Policies are trait-based so a smarter opponent can be dropped in without
//! touching the engine. The default opponent picks uniformly among the
//! non-empty pits.

use crate::core::{Board, EngineError, GameRng, Side};

/// Policy for choosing the computer player's pit.
pub trait BotPolicy: Send + Sync {
    /// Choose a board index to sow from.
    ///
    /// Must only return a non-empty pit owned by `side`, and must return
    /// `EngineError::NoLegalMove` when there is none. Never mutates the board.
    fn choose_move(&self, board: &Board, side: Side, rng: &mut GameRng) -> Result<usize, EngineError>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Uniform random policy.
///
/// Selects uniformly from legal pits.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomBot;

impl BotPolicy for RandomBot {
    fn choose_move(&self, board: &Board, side: Side, rng: &mut GameRng) -> Result<usize, EngineError> {
        let legal = board.legal_pits(side);
        rng.choose(&legal)
            .copied()
            .ok_or(EngineError::NoLegalMove(side))
    }

    fn name(&self) -> &str {
        "Random"
    }
}
