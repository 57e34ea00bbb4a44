//! Sowing: executing one move on the board.
//!
//! The chosen pit is emptied and its marbles are dropped one per cell around
//! the ring. The opponent's store is skipped on every lap; it neither receives
//! a marble nor uses one up. The cell that gets the last marble decides the
//! outcome:
//! - own store: the mover plays again
//! - own pit that was empty, with [`CaptureRule::Opposite`]: capture
//!
//! Sowing never touches turn or round bookkeeping; that belongs to the
//! engine.

use tracing::debug;

use crate::core::{Board, CaptureRule, IllegalMove, Side};

/// One marble dropped during a sowing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VisitedCell {
    /// Cell that received the marble.
    pub index: usize,
    /// Its count right after the drop.
    pub new_count: u32,
}

/// The drops of one sowing, in order.
///
/// Finite, one item per deposited marble, and consumed once. Dropping it has
/// no effect on the game.
#[derive(Debug)]
pub struct VisitedCells {
    inner: std::vec::IntoIter<VisitedCell>,
}

impl VisitedCells {
    fn new(cells: Vec<VisitedCell>) -> Self {
        Self {
            inner: cells.into_iter(),
        }
    }
}

impl Iterator for VisitedCells {
    type Item = VisitedCell;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for VisitedCells {}

/// Outcome of one sowing.
#[derive(Debug)]
pub struct SowResult {
    /// Cell that received the last marble.
    pub landing: usize,
    /// Last marble went into the mover's store; the mover plays again.
    pub landed_in_own_store: bool,
    /// A capture happened.
    pub captured: bool,
    /// Marbles moved to the store by the capture (0 without one).
    pub captured_marbles: u32,
    /// Per-marble drop events for animation.
    pub visited: VisitedCells,
}

/// Check that `side` may sow from `pit` without touching the board.
pub fn check_move(board: &Board, side: Side, pit: usize) -> Result<(), IllegalMove> {
    if board.owner_of_pit(pit) != Some(side) {
        return Err(IllegalMove::NotOwned { side, index: pit });
    }
    if board.cells()[pit] == 0 {
        return Err(IllegalMove::EmptyPit { index: pit });
    }
    Ok(())
}

/// Sow the marbles of `pit` for `side`.
///
/// On error the board is left exactly as it was.
pub fn sow(
    board: &mut Board,
    side: Side,
    pit: usize,
    capture: CaptureRule,
) -> Result<SowResult, IllegalMove> {
    check_move(board, side, pit)?;

    let len = board.len();
    let skipped = board.store(side.other());
    let mut remaining = board.take(pit);
    let mut visited = Vec::with_capacity(remaining as usize);
    let mut cursor = pit;

    while remaining > 0 {
        cursor = (cursor + 1) % len;
        if cursor == skipped {
            continue;
        }
        let new_count = board.add(cursor, 1);
        visited.push(VisitedCell {
            index: cursor,
            new_count,
        });
        remaining -= 1;
    }

    let landing = cursor;
    let landed_in_own_store = board.is_store(landing, side);
    let captured_marbles = if landed_in_own_store {
        0
    } else {
        apply_capture(board, side, landing, capture)
    };

    debug!(
        %side,
        pit,
        landing,
        landed_in_own_store,
        captured_marbles,
        board = %board,
        "sowed"
    );

    Ok(SowResult {
        landing,
        landed_in_own_store,
        captured: captured_marbles > 0,
        captured_marbles,
        visited: VisitedCells::new(visited),
    })
}

/// Capture hook. Returns the number of marbles moved into the store.
fn apply_capture(board: &mut Board, side: Side, landing: usize, rule: CaptureRule) -> u32 {
    match rule {
        CaptureRule::Disabled => 0,
        CaptureRule::Opposite => {
            if board.owner_of_pit(landing) != Some(side) || board.cells()[landing] != 1 {
                return 0;
            }
            let Some(opposite) = board.opposite(landing) else {
                return 0;
            };
            if board.cells()[opposite] == 0 {
                return 0;
            }
            let taken = board.take(opposite) + board.take(landing);
            board.add(board.store(side), taken);
            taken
        }
    }
}
