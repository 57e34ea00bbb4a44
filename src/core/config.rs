//! Game configuration.
//!
//! The engine never hardcodes the board size or the game length. A UI sets up
//! a `GameConfig` once and hands it to the engine:
//! - `pits_per_side`: sowing pits owned by each player
//! - `seeds_per_pit`: marbles placed in every pit at the start
//! - `round_limit`: counted moves before the game ends
//! - `capture`: optional capture rule applied after sowing

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Sowing pits per side on the standard board.
pub const DEFAULT_PITS_PER_SIDE: usize = 5;
/// Marbles per pit at game start.
pub const DEFAULT_SEEDS_PER_PIT: u32 = 7;
/// Game ends once the round counter exceeds this.
pub const DEFAULT_ROUND_LIMIT: u32 = 5;

/// What happens when the last marble lands in one of the mover's empty pits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureRule {
    /// Nothing happens.
    #[default]
    Disabled,
    /// Traditional Sungka capture: the landing marble and every marble in the
    /// opposite pit move to the mover's store.
    Opposite,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Sowing pits owned by each player (1-255).
    pub pits_per_side: usize,

    /// Marbles in each sowing pit at the start of a game.
    pub seeds_per_pit: u32,

    /// The game is over once `round_number > round_limit`.
    pub round_limit: u32,

    /// Capture rule applied at the end of each sowing.
    pub capture: CaptureRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pits_per_side: DEFAULT_PITS_PER_SIDE,
            seeds_per_pit: DEFAULT_SEEDS_PER_PIT,
            round_limit: DEFAULT_ROUND_LIMIT,
            capture: CaptureRule::Disabled,
        }
    }
}

impl GameConfig {
    /// Create the default configuration (5 pits, 7 seeds, 5 rounds).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sowing pits per side.
    #[must_use]
    pub fn with_pits_per_side(mut self, pits: usize) -> Self {
        self.pits_per_side = pits;
        self
    }

    /// Set the starting marbles per pit.
    #[must_use]
    pub fn with_seeds_per_pit(mut self, seeds: u32) -> Self {
        self.seeds_per_pit = seeds;
        self
    }

    /// Set the round limit.
    #[must_use]
    pub fn with_round_limit(mut self, limit: u32) -> Self {
        self.round_limit = limit;
        self
    }

    /// Set the capture rule.
    #[must_use]
    pub fn with_capture(mut self, capture: CaptureRule) -> Self {
        self.capture = capture;
        self
    }

    /// Total marbles on the board for this configuration.
    #[must_use]
    pub fn total_marbles(&self) -> u64 {
        self.pits_per_side as u64 * 2 * u64::from(self.seeds_per_pit)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pits_per_side == 0 {
            return Err(ConfigError::Validation("pits_per_side must be > 0".into()));
        }
        if self.pits_per_side > 255 {
            return Err(ConfigError::Validation("pits_per_side must be <= 255".into()));
        }
        if self.seeds_per_pit == 0 {
            return Err(ConfigError::Validation("seeds_per_pit must be > 0".into()));
        }
        if self.total_marbles() > u64::from(u32::MAX) {
            return Err(ConfigError::Validation(
                "total marbles must fit in a u32 cell".into(),
            ));
        }
        if self.round_limit == 0 {
            return Err(ConfigError::Validation("round_limit must be > 0".into()));
        }
        Ok(())
    }
}
