//! Function-evaluation problems for the "who goes first" challenge.
//!
//! Every problem asks for `f(x)` with `x` drawn from `1..=5`:
//!
//! | Difficulty | Function                | Ranges                              |
//! |------------|-------------------------|-------------------------------------|
//! | Easy       | `x + c`                 | `c` in `-4..=4`                     |
//! | Medium     | `x^2 + b x`             | `b` in `-5..=5`                     |
//! | Hard       | `a (x - r1)(x - r2)`    | `r1 != r2` in `1..=5`, `a` in `1..=2` |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{ConfigError, GameRng};

/// Values `x` is drawn from.
pub const X_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

/// Challenge difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Linear function.
    Easy,
    /// Quadratic with a linear term.
    Medium,
    /// Quadratic given by two integer roots.
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownDifficulty(s.to_string()))
    }
}

/// The function to evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Function {
    /// `f(x) = x + constant`
    Linear { constant: i64 },
    /// `f(x) = x^2 + b x`
    Quadratic { b: i64 },
    /// `f(x) = a (x - root1)(x - root2)`
    Factored { a: i64, root1: i64, root2: i64 },
}

impl Function {
    /// Evaluate at `x`.
    #[must_use]
    pub fn eval(&self, x: i64) -> i64 {
        match *self {
            Function::Linear { constant } => x + constant,
            Function::Quadratic { b } => x * x + b * x,
            Function::Factored { a, root1, root2 } => a * (x - root1) * (x - root2),
        }
    }
}

/// ` + n` / ` - n`, or nothing for zero.
fn signed_term(f: &mut fmt::Formatter<'_>, value: i64, suffix: &str) -> fmt::Result {
    let magnitude = value.unsigned_abs();
    let coefficient = if magnitude == 1 && !suffix.is_empty() {
        String::new()
    } else {
        magnitude.to_string()
    };
    match value.signum() {
        1 => write!(f, " + {coefficient}{suffix}"),
        -1 => write!(f, " - {coefficient}{suffix}"),
        _ => Ok(()),
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Function::Linear { constant } => {
                write!(f, "f(x) = x")?;
                signed_term(f, constant, "")
            }
            Function::Quadratic { b } => {
                write!(f, "f(x) = x^2")?;
                signed_term(f, b, "x")
            }
            Function::Factored { a, root1, root2 } => {
                write!(f, "f(x) = ")?;
                if a != 1 {
                    write!(f, "{a}")?;
                }
                write!(f, "(x - {root1})(x - {root2})")
            }
        }
    }
}

/// A generated problem and its answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Problem {
    pub difficulty: Difficulty,
    pub function: Function,
    pub x: i64,
}

impl Problem {
    /// Draw a problem of the given difficulty.
    pub fn generate(difficulty: Difficulty, rng: &mut GameRng) -> Self {
        let x = rng.gen_range(X_RANGE);
        let function = match difficulty {
            Difficulty::Easy => Function::Linear {
                constant: rng.gen_range(-4..=4),
            },
            Difficulty::Medium => Function::Quadratic {
                b: rng.gen_range(-5..=5),
            },
            Difficulty::Hard => {
                let mut roots: Vec<i64> = X_RANGE.collect();
                rng.shuffle(&mut roots);
                Function::Factored {
                    a: rng.gen_range(1..=2),
                    root1: roots[0],
                    root2: roots[1],
                }
            }
        };
        Self {
            difficulty,
            function,
            x,
        }
    }

    /// The correct answer, `f(x)`.
    #[must_use]
    pub fn answer(&self) -> i64 {
        self.function.eval(self.x)
    }

    /// What the players are asked, e.g. `f(3)`.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("f({})", self.x)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; solve for {}", self.function, self.prompt())
    }
}
