use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Message shown to the player after an accepted guess.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    TooHigh { remaining: Number },
    TooLow { remaining: Number },
    Won { attempts: Number },
    /// Reveals the secret once the budget is exhausted.
    Lost { secret: Number },
}

impl Feedback {
    pub const fn is_directional(self) -> bool {
        matches!(self, Self::TooHigh { .. } | Self::TooLow { .. })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Feedback::*;
        match *self {
            TooHigh { remaining } => write!(
                f,
                "Too high! {} {} remaining",
                remaining,
                attempts_noun(remaining)
            ),
            TooLow { remaining } => write!(
                f,
                "Too low! {} {} remaining",
                remaining,
                attempts_noun(remaining)
            ),
            Won { attempts } => write!(
                f,
                "Correct! You won in {} {}!",
                attempts,
                attempts_noun(attempts)
            ),
            Lost { secret } => write!(f, "Game Over! The number was {}", secret),
        }
    }
}
