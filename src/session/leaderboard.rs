//! Results of finished games and a running leaderboard.
//!
//! A [`GameRecord`] is taken from a finished [`GameState`]. The
//! [`Leaderboard`] folds records into per-name totals for the life of the
//! process; nothing is written anywhere.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::debug;

use crate::core::{EngineError, GameResult, GameState, Side, SideMap};

/// Outcome of one finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Player names by seat.
    pub names: SideMap<String>,
    /// Final store totals by seat.
    pub scores: SideMap<u32>,
    /// Winner or tie.
    pub result: GameResult,
    /// Moves played.
    pub rounds: u32,
}

impl GameRecord {
    /// Take the record of a finished game.
    pub fn from_state(state: &GameState) -> Result<Self, EngineError> {
        let result = state.result().ok_or(EngineError::GameInProgress)?;
        let (p1, p2) = state.scores();
        let names = SideMap::new(|side| state.player(side).name.clone());

        Ok(Self {
            names,
            scores: SideMap::from_pair(p1, p2),
            result,
            rounds: state.round_number().saturating_sub(1),
        })
    }

    /// Name of the winner, `None` on a tie.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        self.result.winner().map(|side| self.names[side].as_str())
    }
}

/// Accumulated totals for one player name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub games: u32,
    pub wins: u32,
    pub ties: u32,
    pub losses: u32,
    /// Sum of final store totals.
    pub points: u64,
}

/// In-memory leaderboard keyed by player name.
#[derive(Clone, Debug, Default)]
pub struct Leaderboard {
    entries: FxHashMap<String, Standing>,
}

impl Leaderboard {
    /// Create an empty leaderboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished game.
    pub fn record(&mut self, record: &GameRecord) {
        for side in Side::ALL {
            let name = &record.names[side];
            let entry = self
                .entries
                .entry(name.clone())
                .or_insert_with(|| Standing {
                    name: name.clone(),
                    ..Standing::default()
                });

            entry.games += 1;
            entry.points += u64::from(record.scores[side]);
            match record.result {
                GameResult::Winner(winner) if winner == side => entry.wins += 1,
                GameResult::Winner(_) => entry.losses += 1,
                GameResult::Tie => entry.ties += 1,
            }
        }
        debug!(winner = ?record.winner_name(), "game recorded");
    }

    /// Totals for one name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Standing> {
        self.entries.get(name)
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All players, best first: most wins, then most points, then by name.
    #[must_use]
    pub fn standings(&self) -> Vec<&Standing> {
        let mut ranked: Vec<&Standing> = self.entries.values().collect();
        ranked.sort_by(|a, b| {
            (Reverse(a.wins), Reverse(a.points), &a.name)
                .cmp(&(Reverse(b.wins), Reverse(b.points), &b.name))
        });
        ranked
    }
}
