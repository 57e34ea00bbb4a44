//! Core engine types: sides and players, board, state, RNG, configuration,
//! errors.
//!
//! Everything above this module (sowing, turn control, bot, challenge) is
//! built from these pieces.

pub mod player;
pub mod config;
pub mod error;
pub mod rng;
pub mod board;
pub mod state;

pub use player::{Player, Players, Side, SideMap, BOT_NAME, DEFAULT_P1_NAME, DEFAULT_P2_NAME};
pub use config::{CaptureRule, GameConfig, DEFAULT_PITS_PER_SIDE, DEFAULT_ROUND_LIMIT, DEFAULT_SEEDS_PER_PIT};
pub use error::{ConfigError, EngineError, IllegalMove};
pub use rng::{GameRng, GameRngState};
pub use board::{Board, LegalPits};
pub use state::{GameResult, GameSnapshot, GameState, MoveRecord, Phase, TurnKind};
