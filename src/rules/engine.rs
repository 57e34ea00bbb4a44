//! Turn and round controller.
//!
//! `Sungka` owns only configuration and the bot policy. Game data lives in a
//! [`GameState`] the caller keeps; every operation takes `&GameState` and
//! returns an updated copy, so a rejected request leaves the caller's state
//! exactly as it was.
//!
//! ## Phases
//!
//! - `AwaitingMove(side)`: a human on `side` must call `submit_move`
//! - `BotToMove(side)`: resolved by the engine inside the same call
//! - `GameOver(result)`: absorbing; start a new game to continue
//!
//! After every sowing the round counter goes up by one. Landing in the
//! mover's own store keeps the turn; anything else hands it over. Once the
//! counter exceeds the configured limit the game is over.
//!
//! A side with no marbles in its pits cannot move. Its turn is recorded as a
//! pass (no round increment) and handed over. If neither side can move the
//! game ends.

use tracing::{debug, info, instrument};

use crate::bot::{BotPolicy, RandomBot};
use crate::core::{
    Board, EngineError, GameConfig, GameResult, GameState, GameRng, LegalPits, MoveRecord, Phase,
    Players, Side, TurnKind,
};

use super::sowing::{sow, SowResult, VisitedCells};

/// A turn the engine took without caller input.
#[derive(Debug)]
pub enum AutoTurn {
    /// The bot on `side` sowed from `pit` (board index).
    Bot {
        side: Side,
        pit: usize,
        result: SowResult,
    },
    /// `side` had no legal pit and passed.
    Pass { side: Side },
}

impl AutoTurn {
    /// Side that took the turn.
    #[must_use]
    pub fn side(&self) -> Side {
        match self {
            AutoTurn::Bot { side, .. } | AutoTurn::Pass { side } => *side,
        }
    }
}

/// Result of a successful `submit_move`.
#[derive(Debug)]
pub struct MoveOutcome {
    /// State after the move and any bot turns that followed.
    pub state: GameState,
    /// The submitted move ended in the mover's store.
    pub landed_in_own_store: bool,
    /// The submitted move captured.
    pub captured: bool,
    /// The game ended during this call.
    pub is_game_over: bool,
    /// Winner, once the game is over and not tied.
    pub winner: Option<Side>,
    /// Drop events of the submitted move.
    pub visited: VisitedCells,
    /// Bot moves and passes resolved after the submitted move, in order.
    pub auto_turns: Vec<AutoTurn>,
}

/// Result of resolving pending bot turns.
#[derive(Debug)]
pub struct AutoTurns {
    /// State once a human must move or the game is over.
    pub state: GameState,
    /// Turns taken, in order.
    pub turns: Vec<AutoTurn>,
}

/// The Sungka rules engine.
#[derive(Clone, Debug)]
pub struct Sungka<P = RandomBot> {
    config: GameConfig,
    policy: P,
}

impl Sungka<RandomBot> {
    /// Create an engine with the random bot.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        Self::with_policy(config, RandomBot)
    }
}

impl Default for Sungka<RandomBot> {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            policy: RandomBot,
        }
    }
}

impl<P: BotPolicy> Sungka<P> {
    /// Create an engine with a custom bot policy.
    pub fn with_policy(config: GameConfig, policy: P) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config, policy })
    }

    /// Get the game configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the bot policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Start a game.
    ///
    /// `first_player` normally comes from the first-player challenge. If that
    /// side is a bot the returned state is in `BotToMove`; call
    /// [`Sungka::play_bot_turns`] to resolve it.
    #[instrument(skip(self, players), fields(p1 = %players[Side::P1].name, p2 = %players[Side::P2].name))]
    pub fn new_game(&self, players: Players, first_player: Side, seed: u64) -> GameState {
        let board = Board::new(self.config.pits_per_side, self.config.seeds_per_pit);
        let state = GameState::new(board, players, first_player, GameRng::new(seed));
        info!(%first_player, board = %state.board(), "game started");
        state
    }

    /// Start over with the same players, a fresh board and round 1.
    pub fn play_again(&self, state: &GameState, first_player: Side, seed: u64) -> GameState {
        self.new_game(state.players().clone(), first_player, seed)
    }

    /// Non-empty pits (board indices) of `side`.
    pub fn legal_moves(&self, state: &GameState, side: Side) -> LegalPits {
        state.board().legal_pits(side)
    }

    /// Store totals as `(p1, p2)`.
    pub fn get_scores(&self, state: &GameState) -> (u32, u32) {
        state.scores()
    }

    /// Final result, once the game is over.
    pub fn result(&self, state: &GameState) -> Option<GameResult> {
        state.result()
    }

    /// Play `pit_number` (1-based, along `side`'s row) for a human player.
    ///
    /// Bot turns that follow are resolved before returning.
    #[instrument(skip(self, state), fields(round = state.round_number()))]
    pub fn submit_move(
        &self,
        state: &GameState,
        side: Side,
        pit_number: usize,
    ) -> Result<MoveOutcome, EngineError> {
        match state.phase() {
            Phase::GameOver(_) => return Err(EngineError::GameOver),
            Phase::AwaitingMove(to_move) if to_move == side => {}
            Phase::AwaitingMove(_) | Phase::BotToMove(_) => {
                return Err(EngineError::NotYourTurn { side })
            }
        }

        let pit = state.board().pit_index(side, pit_number)?;
        let mut next = state.clone();
        let result = self.apply_sow(&mut next, side, pit, false)?;

        let mut auto_turns = Vec::new();
        self.settle(&mut next, &mut auto_turns)?;

        Ok(MoveOutcome {
            landed_in_own_store: result.landed_in_own_store,
            captured: result.captured,
            is_game_over: next.is_game_over(),
            winner: next.result().and_then(GameResult::winner),
            visited: result.visited,
            auto_turns,
            state: next,
        })
    }

    /// Resolve a `BotToMove` state until a human must move or the game ends.
    #[instrument(skip(self, state), fields(round = state.round_number()))]
    pub fn play_bot_turns(&self, state: &GameState) -> Result<AutoTurns, EngineError> {
        match state.phase() {
            Phase::BotToMove(_) => {}
            Phase::GameOver(_) => return Err(EngineError::GameOver),
            Phase::AwaitingMove(_) => return Err(EngineError::NoBotToMove),
        }

        let mut next = state.clone();
        let mut turns = Vec::new();
        self.settle(&mut next, &mut turns)?;
        Ok(AutoTurns { state: next, turns })
    }

    /// Sow, record, count the round, and decide who moves next.
    fn apply_sow(
        &self,
        state: &mut GameState,
        side: Side,
        pit: usize,
        by_bot: bool,
    ) -> Result<SowResult, EngineError> {
        let result = sow(state.board_mut(), side, pit, self.config.capture)?;

        state.record(MoveRecord {
            side,
            round: state.round_number(),
            by_bot,
            kind: TurnKind::Sow {
                pit,
                landing: result.landing,
                landed_in_own_store: result.landed_in_own_store,
                captured: result.captured,
            },
        });
        state.advance_round();

        if state.round_number() > self.config.round_limit {
            self.finish(state);
        } else if result.landed_in_own_store {
            debug!(%side, "extra turn");
            state.hand_turn_to(side);
        } else {
            state.hand_turn_to(side.other());
        }

        Ok(result)
    }

    /// Run bot moves and forced passes until a human can move or the game
    /// is over.
    fn settle(&self, state: &mut GameState, turns: &mut Vec<AutoTurn>) -> Result<(), EngineError> {
        loop {
            match state.phase() {
                Phase::GameOver(_) => return Ok(()),
                Phase::AwaitingMove(side) => {
                    if !state.board().side_is_empty(side) {
                        return Ok(());
                    }
                    self.pass(state, side, false, turns);
                }
                Phase::BotToMove(side) => {
                    let (board, rng) = state.board_and_rng();
                    match self.policy.choose_move(board, side, rng) {
                        Ok(pit) => {
                            debug!(%side, pit, policy = self.policy.name(), "bot move");
                            let result = self.apply_sow(state, side, pit, true)?;
                            turns.push(AutoTurn::Bot { side, pit, result });
                        }
                        Err(EngineError::NoLegalMove(_)) if state.board().side_is_empty(side) => {
                            self.pass(state, side, true, turns);
                        }
                        Err(err) => return Err(err),
                    }
                }
            }
        }
    }

    /// Record a forced pass for `side`, or end the game if nobody can move.
    fn pass(&self, state: &mut GameState, side: Side, by_bot: bool, turns: &mut Vec<AutoTurn>) {
        if state.board().side_is_empty(side.other()) {
            self.finish(state);
            return;
        }

        debug!(%side, "no legal move, passing");
        state.record(MoveRecord {
            side,
            round: state.round_number(),
            by_bot,
            kind: TurnKind::Pass,
        });
        state.hand_turn_to(side.other());
        turns.push(AutoTurn::Pass { side });
    }

    fn finish(&self, state: &mut GameState) {
        let (p1, p2) = state.scores();
        let result = GameResult::from_scores(p1, p2);
        state.finish(result);
        info!(p1, p2, ?result, rounds = state.round_number().saturating_sub(1), "game over");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Sungka {
        Sungka::default()
    }

    fn two_humans() -> Players {
        Players::two_player("Ana", "Ben")
    }

    #[test]
    fn test_new_game() {
        let engine = engine();
        let state = engine.new_game(two_humans(), Side::P1, 42);

        assert_eq!(state.board().cells(), &[7, 7, 7, 7, 7, 0, 7, 7, 7, 7, 7, 0]);
        assert_eq!(state.round_number(), 1);
        assert_eq!(state.phase(), Phase::AwaitingMove(Side::P1));
        assert_eq!(engine.get_scores(&state), (0, 0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Sungka::new(GameConfig::new().with_seeds_per_pit(0)).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_turn_switches_after_plain_move() {
        let engine = engine();
        let state = engine.new_game(two_humans(), Side::P1, 42);

        let outcome = engine.submit_move(&state, Side::P1, 1).unwrap();

        assert!(!outcome.landed_in_own_store);
        assert_eq!(outcome.state.board().cells(), &[0, 8, 8, 8, 8, 1, 8, 8, 7, 7, 7, 0]);
        assert_eq!(outcome.state.current_player(), Side::P2);
        assert_eq!(outcome.state.phase(), Phase::AwaitingMove(Side::P2));
        assert_eq!(outcome.state.round_number(), 2);
        assert!(outcome.auto_turns.is_empty());
    }

    #[test]
    fn test_extra_turn_keeps_player() {
        let engine = Sungka::new(GameConfig::new().with_seeds_per_pit(4)).unwrap();
        let state = engine.new_game(two_humans(), Side::P1, 42);

        // Pit 2 (index 1) holds 4 marbles: 2, 3, 4, store.
        let outcome = engine.submit_move(&state, Side::P1, 2).unwrap();

        assert!(outcome.landed_in_own_store);
        assert_eq!(outcome.state.current_player(), Side::P1);
        assert_eq!(outcome.state.phase(), Phase::AwaitingMove(Side::P1));
        assert_eq!(outcome.state.round_number(), 2);
    }

    #[test]
    fn test_wrong_side_rejected() {
        let engine = engine();
        let state = engine.new_game(two_humans(), Side::P1, 42);

        assert_eq!(
            engine.submit_move(&state, Side::P2, 1).unwrap_err(),
            EngineError::NotYourTurn { side: Side::P2 }
        );
    }

    #[test]
    fn test_pit_number_out_of_range() {
        let engine = engine();
        let state = engine.new_game(two_humans(), Side::P1, 42);

        assert_eq!(
            engine.submit_move(&state, Side::P1, 6).unwrap_err(),
            EngineError::PitOutOfRange { pit: 6, pits_per_side: 5 }
        );
        assert!(engine.submit_move(&state, Side::P1, 0).is_err());
    }

    #[test]
    fn test_empty_pit_rejected_without_changes() {
        let engine = Sungka::new(GameConfig::new().with_seeds_per_pit(1)).unwrap();
        let state = engine.new_game(two_humans(), Side::P1, 42);
        let state = engine.submit_move(&state, Side::P1, 1).unwrap().state;
        let state = engine.submit_move(&state, Side::P2, 1).unwrap().state;
        assert_eq!(state.current_player(), Side::P1);

        let before = state.snapshot();
        let err = engine.submit_move(&state, Side::P1, 1).unwrap_err();

        assert!(matches!(err, EngineError::IllegalMove(_)));
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_game_ends_after_round_limit() {
        let engine = engine();
        let mut state = engine.new_game(two_humans(), Side::P1, 42);
        let mut moves = 0;

        while !state.is_game_over() {
            let side = state.current_player();
            let pit = engine.legal_moves(&state, side)[0];
            let number = state.board().pit_number(pit).unwrap();
            state = engine.submit_move(&state, side, number).unwrap().state;
            moves += 1;
        }

        assert_eq!(moves, 5);
        assert_eq!(state.round_number(), 6);
        assert_eq!(state.history().len(), 5);
        assert_eq!(
            engine.submit_move(&state, state.current_player(), 1).unwrap_err(),
            EngineError::GameOver
        );
    }

    #[test]
    fn test_bot_replies_within_same_call() {
        let engine = engine();
        let state = engine.new_game(Players::one_player("Ana"), Side::P1, 42);

        let outcome = engine.submit_move(&state, Side::P1, 1).unwrap();

        assert!(!outcome.auto_turns.is_empty());
        assert!(outcome.auto_turns.iter().all(|t| t.side() == Side::P2));
        assert!(outcome.state.is_game_over() || outcome.state.phase() == Phase::AwaitingMove(Side::P1));
        assert!(outcome.state.history().iter().skip(1).all(|r| r.by_bot));
    }

    #[test]
    fn test_bot_opening_is_resolved_on_request() {
        let engine = engine();
        let state = engine.new_game(Players::one_player("Ana"), Side::P2, 42);
        assert_eq!(state.phase(), Phase::BotToMove(Side::P2));

        assert_eq!(
            engine.submit_move(&state, Side::P1, 1).unwrap_err(),
            EngineError::NotYourTurn { side: Side::P1 }
        );

        let resolved = engine.play_bot_turns(&state).unwrap();
        assert!(!resolved.turns.is_empty());
        assert_eq!(resolved.state.phase(), Phase::AwaitingMove(Side::P1));

        assert_eq!(
            engine.play_bot_turns(&resolved.state).unwrap_err(),
            EngineError::NoBotToMove
        );
    }

    #[test]
    fn test_play_again_resets() {
        let engine = engine();
        let state = engine.new_game(two_humans(), Side::P1, 42);
        let state = engine.submit_move(&state, Side::P1, 3).unwrap().state;

        let fresh = engine.play_again(&state, Side::P2, 7);

        assert_eq!(fresh.round_number(), 1);
        assert_eq!(fresh.board(), &Board::new(5, 7));
        assert_eq!(fresh.players(), state.players());
        assert_eq!(fresh.phase(), Phase::AwaitingMove(Side::P2));
        assert!(fresh.history().is_empty());
    }
}
