//! Deciding who moves first.
//!
//! Each human player answers the challenge problem; bots never answer and any
//! answer filed under a bot's name is ignored. Players whose answer equals
//! the correct value are candidates, and the first player is drawn uniformly
//! from them. With no candidates the draw is over both seats.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{GameRng, Players, Side};

use super::problem::{Difficulty, Problem};

/// Submitted answers keyed by player name. `None` means no usable answer.
pub type Answers = FxHashMap<String, Option<f64>>;

/// Parse a typed answer. Anything that is not a number counts as no answer.
#[must_use]
pub fn parse_answer(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Outcome of the challenge.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    /// Side that moves first.
    pub first_player: Side,
    /// Name of the player on that side.
    pub first_player_name: String,
    /// Correct value of the problem.
    pub answer: i64,
    /// Sides that answered correctly, in seat order.
    pub correct: SmallVec<[Side; 2]>,
}

impl Resolution {
    /// True when nobody answered correctly and the first player was drawn
    /// from both seats.
    #[must_use]
    pub fn by_chance(&self) -> bool {
        self.correct.is_empty()
    }
}

/// A problem posed to the players.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Challenge {
    problem: Problem,
}

impl Challenge {
    /// Pose an existing problem.
    #[must_use]
    pub fn new(problem: Problem) -> Self {
        Self { problem }
    }

    /// Draw a problem of the given difficulty.
    pub fn generate(difficulty: Difficulty, rng: &mut GameRng) -> Self {
        Self::new(Problem::generate(difficulty, rng))
    }

    /// Draw the problem belonging to `seed`; the same seed always gives the
    /// same problem.
    #[must_use]
    pub fn from_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::generate(difficulty, &mut GameRng::new(seed).for_context("challenge"))
    }

    /// The problem.
    #[must_use]
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Whether an answer is exactly right.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_correct(&self, answer: f64) -> bool {
        answer == self.problem.answer() as f64
    }

    /// Pick the first player from the submitted answers.
    pub fn resolve(&self, players: &Players, answers: &Answers, rng: &mut GameRng) -> Resolution {
        let correct: SmallVec<[Side; 2]> = players
            .iter()
            .filter(|(_, player)| !player.is_bot)
            .filter(|(_, player)| {
                answers
                    .get(&player.name)
                    .copied()
                    .flatten()
                    .is_some_and(|a| self.is_correct(a))
            })
            .map(|(side, _)| side)
            .collect();

        let pool: &[Side] = if correct.is_empty() { &Side::ALL } else { &correct };
        let first_player = rng.choose(pool).copied().unwrap_or(Side::P1);

        debug!(
            answer = self.problem.answer(),
            ?correct,
            %first_player,
            "first player resolved"
        );

        Resolution {
            first_player,
            first_player_name: players[first_player].name.clone(),
            answer: self.problem.answer(),
            correct,
        }
    }
}

/// Resolve the challenge identified by `difficulty` and `seed`.
///
/// The problem is the one [`Challenge::from_seed`] shows for the same pair,
/// so a UI can display it first and resolve afterwards without keeping any
/// state.
pub fn resolve_first_player(
    difficulty: Difficulty,
    seed: u64,
    players: &Players,
    answers: &Answers,
) -> Resolution {
    let challenge = Challenge::from_seed(difficulty, seed);
    let mut rng = GameRng::new(seed).for_context("first-player");
    challenge.resolve(players, answers, &mut rng)
}
