//! The Sungka board: a ring of sowing pits and two stores.
//!
//! ## Layout
//!
//! With `n` pits per side the ring has `2n + 2` cells:
//!
//! ```text
//! 0 .. n          P1 pits
//! n               P1 store
//! n+1 ..= 2n      P2 pits
//! 2n + 1          P2 store
//! ```
//!
//! Sowing walks the ring in increasing index order and wraps at the end, so
//! each side's pits lead into that side's store.
//!
//! The total number of marbles never changes once the board is built; only
//! the sowing code moves them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Range;

use super::error::{ConfigError, EngineError};
use super::player::Side;

/// Non-empty pits a side may sow from, as board indices.
pub type LegalPits = SmallVec<[usize; 8]>;

/// Marble counts for every cell of the ring.
///
/// Deserialization goes through [`Board::from_cells`], so a decoded board
/// always has `2 * pits_per_side + 2` cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    pits_per_side: usize,
    cells: Vec<u32>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    pits_per_side: usize,
    cells: Vec<u32>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ConfigError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_cells(raw.pits_per_side, raw.cells)
    }
}

impl Board {
    /// Create a board with `seeds` marbles in every pit and empty stores.
    #[must_use]
    pub fn new(pits_per_side: usize, seeds: u32) -> Self {
        assert!(pits_per_side > 0, "Must have at least 1 pit per side");

        let mut board = Self {
            pits_per_side,
            cells: vec![0; 2 * pits_per_side + 2],
        };
        board.reset(seeds);
        board
    }

    /// Build a board from explicit cell counts.
    ///
    /// `cells` must hold exactly `2 * pits_per_side + 2` entries.
    pub fn from_cells(pits_per_side: usize, cells: Vec<u32>) -> Result<Self, ConfigError> {
        if pits_per_side == 0 {
            return Err(ConfigError::Validation("pits_per_side must be > 0".into()));
        }
        let expected = 2 * pits_per_side + 2;
        if cells.len() != expected {
            return Err(ConfigError::Validation(format!(
                "board with {pits_per_side} pits per side needs {expected} cells, got {}",
                cells.len()
            )));
        }
        Ok(Self { pits_per_side, cells })
    }

    /// Refill every pit with `seeds` marbles and empty both stores.
    pub fn reset(&mut self, seeds: u32) {
        for index in 0..self.cells.len() {
            self.cells[index] = if self.is_any_store(index) { 0 } else { seeds };
        }
    }

    /// Number of cells in the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a board has at least four cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sowing pits per side.
    #[must_use]
    pub fn pits_per_side(&self) -> usize {
        self.pits_per_side
    }

    /// All cell counts in ring order.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Marbles in a cell.
    pub fn marbles_at(&self, index: usize) -> Result<u32, EngineError> {
        self.cells.get(index).copied().ok_or(EngineError::OutOfRange {
            index,
            len: self.cells.len(),
        })
    }

    /// Store cell of a side.
    #[must_use]
    pub fn store(&self, side: Side) -> usize {
        match side {
            Side::P1 => self.pits_per_side,
            Side::P2 => 2 * self.pits_per_side + 1,
        }
    }

    /// Board indices of a side's sowing pits, in sowing order.
    #[must_use]
    pub fn pits(&self, side: Side) -> Range<usize> {
        match side {
            Side::P1 => 0..self.pits_per_side,
            Side::P2 => self.pits_per_side + 1..2 * self.pits_per_side + 1,
        }
    }

    /// True iff `index` is `side`'s store.
    #[must_use]
    pub fn is_store(&self, index: usize, side: Side) -> bool {
        index == self.store(side)
    }

    /// True iff `index` is either store.
    #[must_use]
    pub fn is_any_store(&self, index: usize) -> bool {
        Side::ALL.iter().any(|&side| self.is_store(index, side))
    }

    /// Which side owns the pit at `index`. `None` for stores and out-of-range
    /// indices.
    #[must_use]
    pub fn owner_of_pit(&self, index: usize) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.pits(side).contains(&index))
    }

    /// The pit facing `index` across the board.
    #[must_use]
    pub fn opposite(&self, index: usize) -> Option<usize> {
        self.owner_of_pit(index).map(|_| 2 * self.pits_per_side - index)
    }

    /// Map a side's 1-based pit number to its board index.
    pub fn pit_index(&self, side: Side, pit_number: usize) -> Result<usize, EngineError> {
        if pit_number == 0 || pit_number > self.pits_per_side {
            return Err(EngineError::PitOutOfRange {
                pit: pit_number,
                pits_per_side: self.pits_per_side,
            });
        }
        Ok(self.pits(side).start + pit_number - 1)
    }

    /// Map a board index back to its owner's 1-based pit number.
    #[must_use]
    pub fn pit_number(&self, index: usize) -> Option<usize> {
        self.owner_of_pit(index)
            .map(|side| index - self.pits(side).start + 1)
    }

    /// Non-empty pits of a side.
    #[must_use]
    pub fn legal_pits(&self, side: Side) -> LegalPits {
        self.pits(side).filter(|&i| self.cells[i] > 0).collect()
    }

    /// True iff every pit of the side is empty.
    #[must_use]
    pub fn side_is_empty(&self, side: Side) -> bool {
        self.pits(side).all(|i| self.cells[i] == 0)
    }

    /// Store totals as `(p1, p2)`.
    #[must_use]
    pub fn total_marbles_in_stores(&self) -> (u32, u32) {
        (
            self.cells[self.store(Side::P1)],
            self.cells[self.store(Side::P2)],
        )
    }

    /// Sum over every cell.
    #[must_use]
    pub fn total_marbles(&self) -> u64 {
        self.cells.iter().map(|&c| u64::from(c)).sum()
    }

    /// Empty a cell and return what it held.
    pub(crate) fn take(&mut self, index: usize) -> u32 {
        std::mem::take(&mut self.cells[index])
    }

    /// Add marbles to a cell and return its new count.
    pub(crate) fn add(&mut self, index: usize, count: u32) -> u32 {
        self.cells[index] += count;
        self.cells[index]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |range: Range<usize>| {
            self.cells[range]
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        let (p1_store, p2_store) = self.total_marbles_in_stores();
        write!(
            f,
            "[{} | {} | {} | {}]",
            join(self.pits(Side::P1)),
            p1_store,
            join(self.pits(Side::P2)),
            p2_store
        )
    }
}
