//! # sungka
//!
//! Rules engine for Sungka, the Filipino mancala game.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: The engine holds only configuration. Every
//!    operation takes a `&GameState` and returns an updated copy, so a
//!    rejected request never changes the caller's game.
//!
//! 2. **Errors Are Refusals**: Extra turns, captures and game over are
//!    outcomes reported on the move result. Only requests the rules forbid
//!    come back as `Err`.
//!
//! 3. **Deterministic**: Bot moves and the first-player draw come from a
//!    seeded `GameRng`, so any game can be replayed from its seed.
//!
//! ## Board
//!
//! A ring of `2n + 2` cells: P1's pits `0..n`, P1's store `n`, P2's pits
//! `n+1..=2n`, P2's store `2n+1`. Sowing runs in index order and skips the
//! opponent's store.
//!
//! ## Modules
//!
//! - `core`: Sides and players, board, state, RNG, configuration, errors
//! - `rules`: Sowing and the turn/round controller (`Sungka`)
//! - `bot`: Bot policy trait and the random bot
//! - `challenge`: Math problems and the first-player draw
//! - `session`: Game records and the leaderboard

pub mod core;
pub mod rules;
pub mod bot;
pub mod challenge;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap, Player, Players,
    CaptureRule, GameConfig,
    ConfigError, EngineError, IllegalMove,
    GameRng, GameRngState,
    Board, LegalPits,
    GameResult, GameSnapshot, GameState, MoveRecord, Phase, TurnKind,
};

pub use crate::rules::{
    check_move, sow, SowResult, VisitedCell, VisitedCells,
    AutoTurn, AutoTurns, MoveOutcome, Sungka,
};

pub use crate::bot::{BotPolicy, RandomBot};

pub use crate::challenge::{
    parse_answer, resolve_first_player, Answers, Challenge, Difficulty, Function, Problem,
    Resolution,
};

pub use crate::session::{GameRecord, Leaderboard, Standing};
