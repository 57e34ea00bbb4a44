//! Game state.
//!
//! ## GameState
//!
//! Everything one game needs, passed explicitly to and returned from every
//! engine operation:
//! - Board and seated players
//! - Whose turn it is, round counter, phase
//! - Move history (persistent `im::Vector`, so cloning a state is cheap)
//! - Deterministic RNG used for bot moves
//!
//! The engine only reads a `&GameState` and hands back an updated copy, so a
//! rejected move can never leave a half-applied state behind.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::error::ConfigError;
use super::player::{Player, Players, Side};
use super::rng::{GameRng, GameRngState};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly more marbles in this side's store.
    Winner(Side),
    /// Equal store totals.
    Tie,
}

impl GameResult {
    /// Decide the result from store totals.
    #[must_use]
    pub fn from_scores(p1: u32, p2: u32) -> Self {
        match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => GameResult::Winner(Side::P1),
            std::cmp::Ordering::Less => GameResult::Winner(Side::P2),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// The winning side, if any.
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            GameResult::Winner(side) => Some(side),
            GameResult::Tie => None,
        }
    }
}

/// Controller phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a human on this side to submit a move.
    AwaitingMove(Side),
    /// The bot on this side moves next; the engine resolves it itself.
    BotToMove(Side),
    /// Finished. Absorbing until a new game is started.
    GameOver(GameResult),
}

/// What a recorded turn did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnKind {
    /// Sowed from `pit` (board index), last marble in `landing`.
    Sow {
        pit: usize,
        landing: usize,
        landed_in_own_store: bool,
        captured: bool,
    },
    /// No legal pit; the turn passed to the other side.
    Pass,
}

/// One entry of the move history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Side that acted.
    pub side: Side,
    /// Round counter at the time the turn was taken.
    pub round: u32,
    /// Whether the engine chose the move for a bot.
    pub by_bot: bool,
    /// What happened.
    pub kind: TurnKind,
}

/// Full state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    players: Players,
    first_player: Side,
    current_player: Side,
    round_number: u32,
    phase: Phase,
    history: Vector<MoveRecord>,
    rng: GameRng,
}

impl GameState {
    /// Create the opening state. The phase is derived from whether the first
    /// player is a bot.
    pub(crate) fn new(board: Board, players: Players, first_player: Side, rng: GameRng) -> Self {
        let phase = Self::phase_for(&players, first_player);
        Self {
            board,
            players,
            first_player,
            current_player: first_player,
            round_number: 1,
            phase,
            history: Vector::new(),
            rng,
        }
    }

    fn phase_for(players: &Players, side: Side) -> Phase {
        if players[side].is_bot {
            Phase::BotToMove(side)
        } else {
            Phase::AwaitingMove(side)
        }
    }

    // === Accessors ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players.
    #[must_use]
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// The player seated on a side.
    #[must_use]
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side]
    }

    /// Side that opened the game.
    #[must_use]
    pub fn first_player(&self) -> Side {
        self.first_player
    }

    /// Side to move (or that moved last, once the game is over).
    #[must_use]
    pub fn current_player(&self) -> Side {
        self.current_player
    }

    /// Round counter, starting at 1.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Controller phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Final result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    /// Store totals as `(p1, p2)`.
    #[must_use]
    pub fn scores(&self) -> (u32, u32) {
        self.board.total_marbles_in_stores()
    }

    /// Every turn taken so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Engine-side mutation ===

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Board for reading alongside the RNG for drawing, as bot policies need.
    pub(crate) fn board_and_rng(&mut self) -> (&Board, &mut GameRng) {
        (&self.board, &mut self.rng)
    }

    pub(crate) fn record(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }

    pub(crate) fn advance_round(&mut self) {
        self.round_number += 1;
    }

    /// Hand the move to `side`, choosing the phase from who sits there.
    pub(crate) fn hand_turn_to(&mut self, side: Side) {
        self.current_player = side;
        self.phase = Self::phase_for(&self.players, side);
    }

    pub(crate) fn finish(&mut self, result: GameResult) {
        self.phase = Phase::GameOver(result);
    }

    // === Snapshots ===

    /// Capture a serializable copy of this state, including the RNG position.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            players: self.players.clone(),
            first_player: self.first_player,
            current_player: self.current_player,
            round_number: self.round_number,
            phase: self.phase,
            history: self.history.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a state from a snapshot.
    ///
    /// The board was already checked while decoding; this rejects a round
    /// counter of 0 and seats sharing a name.
    pub fn restore(snapshot: GameSnapshot) -> Result<Self, ConfigError> {
        if snapshot.round_number == 0 {
            return Err(ConfigError::Validation("round_number must be >= 1".into()));
        }
        if !snapshot.players.has_distinct_names() {
            return Err(ConfigError::Validation(format!(
                "both seats are named '{}'",
                snapshot.players[Side::P1].name
            )));
        }
        Ok(Self {
            board: snapshot.board,
            players: snapshot.players,
            first_player: snapshot.first_player,
            current_player: snapshot.current_player,
            round_number: snapshot.round_number,
            phase: snapshot.phase,
            history: snapshot.history,
            rng: GameRng::from_state(&snapshot.rng),
        })
    }
}

/// Serializable form of a [`GameState`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub players: Players,
    pub first_player: Side,
    pub current_player: Side,
    pub round_number: u32,
    pub phase: Phase,
    pub history: Vector<MoveRecord>,
    pub rng: GameRngState,
}
