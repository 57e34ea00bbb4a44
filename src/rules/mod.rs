//! Sungka rules.
//!
//! - `sowing`: moving marbles for one move (skip, extra turn, capture hook)
//! - `engine`: turn and round control on top of sowing, bot turns, game end

pub mod sowing;
pub mod engine;

pub use sowing::{check_move, sow, SowResult, VisitedCell, VisitedCells};
pub use engine::{AutoTurn, AutoTurns, MoveOutcome, Sungka};
