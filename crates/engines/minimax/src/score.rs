//! Search scores with decisive outcomes as their own variants.

use std::fmt;
use std::ops::Neg;

/// A position's value from the bot's point of view.
///
/// Variant order gives the total order `Loss < Material(_) < Win`, so
/// decisive outcomes dominate any material balance in plain comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    /// The bot is mated, or the game ended against it.
    Loss,
    /// Material plus positional balance in centipawns.
    Material(i32),
    /// The opponent is mated, or the game ended against them.
    Win,
}

impl Score {
    pub fn is_decisive(self) -> bool {
        !matches!(self, Score::Material(_))
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        match self {
            Score::Loss => Score::Win,
            Score::Material(cp) => Score::Material(-cp),
            Score::Win => Score::Loss,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Loss => write!(f, "-inf"),
            Score::Material(cp) => write!(f, "{cp:+}"),
            Score::Win => write!(f, "+inf"),
        }
    }
}
