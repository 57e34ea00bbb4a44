//! Bookkeeping across games: finished-game records and the leaderboard.

pub mod leaderboard;

pub use leaderboard::{GameRecord, Leaderboard, Standing};
