//! End-to-end game flow through the public engine API.

use sungka::bot::BotPolicy;
use sungka::core::{
    Board, CaptureRule, EngineError, GameConfig, GameResult, GameRng, GameSnapshot, GameState,
    Phase, Players, Side, TurnKind,
};
use sungka::rules::{sow, AutoTurn, Sungka};
use sungka::session::{GameRecord, Leaderboard};

/// Always sows from the lowest non-empty pit.
#[derive(Clone, Copy, Debug)]
struct LowestPit;

impl BotPolicy for LowestPit {
    fn choose_move(&self, board: &Board, side: Side, _rng: &mut GameRng) -> Result<usize, EngineError> {
        board
            .legal_pits(side)
            .first()
            .copied()
            .ok_or(EngineError::NoLegalMove(side))
    }

    fn name(&self) -> &str {
        "lowest-pit"
    }
}

/// Drive a game to the end, choosing human moves with `rng`.
fn play_out<P: BotPolicy>(engine: &Sungka<P>, mut state: GameState, rng: &mut GameRng) -> GameState {
    let mut steps = 0;
    while !state.is_game_over() {
        steps += 1;
        assert!(steps < 1_000, "game did not terminate");

        state = match state.phase() {
            Phase::AwaitingMove(side) => {
                let legal = engine.legal_moves(&state, side);
                assert!(!legal.is_empty(), "human asked to move with an empty row");
                let pit = *rng.choose(&legal).unwrap();
                let number = state.board().pit_number(pit).unwrap();
                engine.submit_move(&state, side, number).unwrap().state
            }
            Phase::BotToMove(_) => engine.play_bot_turns(&state).unwrap().state,
            Phase::GameOver(_) => unreachable!(),
        };
    }
    state
}

#[test]
fn test_worked_example_opening() {
    let engine: Sungka = Sungka::default();
    let state = engine.new_game(Players::two_player("Ana", "Ben"), Side::P1, 1);

    let outcome = engine.submit_move(&state, Side::P1, 1).unwrap();

    assert_eq!(
        outcome.state.board().cells(),
        &[0, 8, 8, 8, 8, 1, 8, 8, 7, 7, 7, 0]
    );
    assert!(!outcome.landed_in_own_store);
    assert!(!outcome.is_game_over);
    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.visited.len(), 7);
    assert_eq!(engine.get_scores(&outcome.state), (1, 0));

    // The original state is untouched.
    assert_eq!(state.board(), &Board::new(5, 7));
}

#[test]
fn test_full_two_player_game_reaches_result() {
    let engine: Sungka = Sungka::default();
    let state = engine.new_game(Players::two_player("Ana", "Ben"), Side::P2, 9);
    let mut rng = GameRng::new(9);

    let done = play_out(&engine, state, &mut rng);

    let (p1, p2) = engine.get_scores(&done);
    assert_eq!(engine.result(&done), Some(GameResult::from_scores(p1, p2)));
    assert_eq!(done.round_number(), 6);
    assert_eq!(done.board().total_marbles(), 70);
}

#[test]
fn test_one_player_game_with_random_bot() {
    let engine: Sungka = Sungka::new(GameConfig::new().with_round_limit(30)).unwrap();

    for seed in 0..20 {
        let state = engine.new_game(Players::one_player("Ana"), Side::ALL[(seed % 2) as usize], seed);
        let mut rng = GameRng::new(seed).for_context("test-human");

        let done = play_out(&engine, state, &mut rng);

        assert!(done.is_game_over());
        assert_eq!(done.board().total_marbles(), 70);
        for record in done.history() {
            assert_eq!(record.by_bot, record.side == Side::P2);
        }
    }
}

#[test]
fn test_custom_policy_is_used() {
    let engine = Sungka::with_policy(GameConfig::default(), LowestPit).unwrap();
    let state = engine.new_game(Players::one_player("Ana"), Side::P2, 5);

    let resolved = engine.play_bot_turns(&state).unwrap();

    match &resolved.turns[0] {
        AutoTurn::Bot { side, pit, result } => {
            assert_eq!(*side, Side::P2);
            assert_eq!(*pit, 6);
            assert!(!result.landed_in_own_store);
        }
        other => panic!("expected a bot move, got {other:?}"),
    }
    assert_eq!(engine.policy().name(), "lowest-pit");
}

#[test]
fn test_bot_with_empty_row_passes() {
    let config = GameConfig::new()
        .with_pits_per_side(3)
        .with_seeds_per_pit(1)
        .with_round_limit(50);
    let engine = Sungka::with_policy(config, LowestPit).unwrap();
    let mut state = engine.new_game(Players::one_player("Ana"), Side::P1, 3);
    // Cells: [1, 1, 1, 0, 1, 1, 1, 0]

    for pit in [3, 2, 3, 1] {
        state = engine.submit_move(&state, Side::P1, pit).unwrap().state;
    }
    // The bot emptied its row with a store landing followed by a long sow.
    assert_eq!(state.board().cells(), &[1, 1, 0, 2, 0, 0, 0, 2]);
    assert!(state.board().side_is_empty(Side::P2));

    let outcome = engine.submit_move(&state, Side::P1, 2).unwrap();

    assert_eq!(outcome.auto_turns.len(), 1);
    assert!(matches!(outcome.auto_turns[0], AutoTurn::Pass { side: Side::P2 }));
    assert_eq!(outcome.state.phase(), Phase::AwaitingMove(Side::P1));
    assert_eq!(outcome.state.board().cells(), &[1, 0, 1, 2, 0, 0, 0, 2]);

    let last = outcome.state.history().last().unwrap();
    assert_eq!(last.kind, TurnKind::Pass);
    assert!(last.by_bot);
    // Passing does not count as a round.
    assert_eq!(outcome.state.round_number(), state.round_number() + 1);
}

#[test]
fn test_both_rows_empty_ends_game() {
    let config = GameConfig::new()
        .with_pits_per_side(1)
        .with_seeds_per_pit(1)
        .with_round_limit(50);
    let engine = Sungka::new(config).unwrap();
    let state = engine.new_game(Players::two_player("Ana", "Ben"), Side::P1, 3);
    // Cells: [1, 0, 1, 0]

    let state = engine.submit_move(&state, Side::P1, 1).unwrap().state;
    // Ana landed in her store and goes again with an empty row: she passes.
    assert_eq!(state.phase(), Phase::AwaitingMove(Side::P2));

    let outcome = engine.submit_move(&state, Side::P2, 1).unwrap();
    assert!(outcome.is_game_over);
    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.state.result(), Some(GameResult::Tie));
    assert_eq!(engine.get_scores(&outcome.state), (1, 1));
}

#[test]
fn test_snapshot_replays_bot_identically() {
    let engine: Sungka = Sungka::new(GameConfig::new().with_round_limit(20)).unwrap();
    let state = engine.new_game(Players::one_player("Ana"), Side::P1, 77);
    let state = engine.submit_move(&state, Side::P1, 3).unwrap().state;

    let json = serde_json::to_string(&state.snapshot()).unwrap();
    let restored = GameState::restore(serde_json::from_str(&json).unwrap()).unwrap();

    let side = state.current_player();
    let number = state
        .board()
        .pit_number(engine.legal_moves(&state, side)[0])
        .unwrap();
    let a = engine.submit_move(&state, side, number).unwrap().state;
    let b = engine.submit_move(&restored, side, number).unwrap().state;

    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_tampered_snapshot_is_rejected() {
    let engine: Sungka = Sungka::default();
    let state = engine.new_game(Players::two_player("Ana", "Ben"), Side::P1, 12);

    let mut json = serde_json::to_value(state.snapshot()).unwrap();
    json["board"]["cells"] = serde_json::json!([7, 7, 7, 7]);
    assert!(serde_json::from_value::<GameSnapshot>(json).is_err());

    let mut snapshot = state.snapshot();
    snapshot.round_number = 0;
    assert!(GameState::restore(snapshot).is_err());

    let restored = GameState::restore(state.snapshot()).unwrap();
    assert!(engine.submit_move(&restored, Side::P1, 1).is_ok());
}

#[test]
fn test_bot_named_human_keeps_own_standing() {
    let engine: Sungka = Sungka::default();
    let mut rng = GameRng::new(21);
    let state = engine.new_game(Players::one_player("Bot"), Side::P1, 21);

    let done = play_out(&engine, state, &mut rng);
    let mut leaderboard = Leaderboard::new();
    leaderboard.record(&GameRecord::from_state(&done).unwrap());

    assert_eq!(leaderboard.len(), 2);
    assert_eq!(leaderboard.get("Bot").unwrap().games, 1);
    assert_eq!(leaderboard.get("Player 1").unwrap().games, 1);
}

#[test]
fn test_capture_rule_through_sow() {
    let mut board = Board::from_cells(3, vec![1, 0, 0, 0, 2, 4, 9, 0]).unwrap();

    let result = sow(&mut board, Side::P1, 0, CaptureRule::Opposite).unwrap();

    assert!(result.captured);
    assert_eq!(result.captured_marbles, 5);
    assert_eq!(board.cells(), &[0, 0, 0, 5, 2, 0, 9, 0]);
}

#[test]
fn test_records_feed_leaderboard() {
    let engine: Sungka = Sungka::default();
    let mut leaderboard = Leaderboard::new();

    let state = engine.new_game(Players::two_player("Ana", "Ben"), Side::P1, 4);
    assert_eq!(
        GameRecord::from_state(&state).unwrap_err(),
        EngineError::GameInProgress
    );

    let mut rng = GameRng::new(4);
    for game in 0..3u64 {
        let state = engine.new_game(Players::two_player("Ana", "Ben"), Side::P1, game);
        let done = play_out(&engine, state, &mut rng);
        let record = GameRecord::from_state(&done).unwrap();

        assert_eq!(record.rounds, 5);
        assert_eq!(record.names[Side::P1], "Ana");
        leaderboard.record(&record);
    }

    let ana = leaderboard.get("Ana").unwrap();
    let ben = leaderboard.get("Ben").unwrap();
    assert_eq!(ana.games, 3);
    assert_eq!(ana.wins + ana.ties + ana.losses, 3);
    assert_eq!(ana.wins, ben.losses);
    assert_eq!(leaderboard.standings().len(), 2);
}
