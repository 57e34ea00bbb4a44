//! Player identification and per-side data storage.
//!
//! ## Side
//!
//! Sungka is strictly two-player. `Side` names the two seats (`P1`, `P2`)
//! and is the key for everything that is owned per player: pits, stores,
//! scores.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side` for O(1) access.
//!
//! ## Player
//!
//! Identity of whoever occupies a side: display name and whether the engine
//! should move on their behalf.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Default display name for the first seat.
pub const DEFAULT_P1_NAME: &str = "Player 1";
/// Default display name for the second seat.
pub const DEFAULT_P2_NAME: &str = "Player 2";
/// Display name given to the computer opponent.
pub const BOT_NAME: &str = "Bot";

/// One of the two seats at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    /// First seat. Owns the low half of the ring.
    P1,
    /// Second seat. Owns the high half of the ring.
    P2,
}

impl Side {
    /// Both sides in seat order.
    pub const ALL: [Side; 2] = [Side::P1, Side::P2];

    /// Get the other side.
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }

    /// Get the 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::P1 => 0,
            Side::P2 => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::P1 => write!(f, "P1"),
            Side::P2 => write!(f, "P2"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use sungka::core::{Side, SideMap};
///
/// let mut stores: SideMap<u32> = SideMap::with_value(0);
/// stores[Side::P2] += 3;
///
/// assert_eq!(stores[Side::P1], 0);
/// assert_eq!(stores[Side::P2], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::P1), factory(Side::P2)],
        }
    }

    /// Create a SideMap from explicit per-side values.
    pub fn from_pair(p1: T, p2: T) -> Self {
        Self { data: [p1, p2] }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Consume the map into a `(p1, p2)` tuple.
    pub fn into_pair(self) -> (T, T) {
        let [p1, p2] = self.data;
        (p1, p2)
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

/// A participant in one game.
///
/// Created at setup and never modified while the game runs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Whether the engine moves for this player.
    pub is_bot: bool,
}

impl Player {
    /// Create a human player.
    ///
    /// Blank names are kept as given; use [`Players::two_player`] for
    /// default-name handling.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_bot: false,
        }
    }

    /// Create the computer opponent.
    #[must_use]
    pub fn bot() -> Self {
        Self {
            name: BOT_NAME.to_string(),
            is_bot: true,
        }
    }
}

/// The pair of players seated for a game.
pub type Players = SideMap<Player>;

impl Players {
    /// Seat one human against the bot.
    ///
    /// The human always takes `P1`. A blank name, or the bot's own name,
    /// falls back to "Player 1".
    #[must_use]
    pub fn one_player(name: &str) -> Self {
        let mut human = name_or_default(name, DEFAULT_P1_NAME);
        if human == BOT_NAME {
            human = DEFAULT_P1_NAME.to_string();
        }
        Self::from_pair(Player::human(human), Player::bot())
    }

    /// Seat two humans.
    ///
    /// Blank names fall back to "Player 1" / "Player 2". Answers and
    /// leaderboard entries are keyed by name, so a second player with the
    /// first player's name is seated as "<name> (2)".
    #[must_use]
    pub fn two_player(p1_name: &str, p2_name: &str) -> Self {
        let p1 = name_or_default(p1_name, DEFAULT_P1_NAME);
        let mut p2 = name_or_default(p2_name, DEFAULT_P2_NAME);
        if p2 == p1 {
            p2 = format!("{p2} (2)");
        }
        Self::from_pair(Player::human(p1), Player::human(p2))
    }

    /// True when the two seats have different names.
    #[must_use]
    pub fn has_distinct_names(&self) -> bool {
        self[Side::P1].name != self[Side::P2].name
    }

    /// Find the side a player with the given name sits on.
    #[must_use]
    pub fn side_of(&self, name: &str) -> Option<Side> {
        self.iter().find(|(_, p)| p.name == name).map(|(side, _)| side)
    }
}

fn name_or_default(name: &str, default: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
