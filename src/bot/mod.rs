//! Computer opponent.
//!
//! - `BotPolicy`: trait the engine calls on the bot's turn
//! - `RandomBot`: uniform choice among non-empty pits

pub mod policy;

pub use policy::{BotPolicy, RandomBot};
