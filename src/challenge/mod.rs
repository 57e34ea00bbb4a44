//! The pre-game math challenge that decides who moves first.
//!
//! - `problem`: difficulty levels and the generated function problems
//! - `resolver`: answer parsing and the first-player draw

pub mod problem;
pub mod resolver;

pub use problem::{Difficulty, Function, Problem};
pub use resolver::{parse_answer, resolve_first_player, Answers, Challenge, Resolution};
