use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Difficulty level, fixing how many guesses a session allows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn attempt_budget(self) -> Number {
        use Difficulty::*;
        match self {
            Easy => 15,
            Medium => 10,
            Hard => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "Easy",
            Medium => "Medium",
            Hard => "Hard",
        }
    }

    pub const fn key(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.key().eq_ignore_ascii_case(s))
            .ok_or(GameError::UnknownDifficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test as test;

    #[test]
    fn budgets_shrink_with_difficulty() {
        assert_eq!(Difficulty::Easy.attempt_budget(), 15);
        assert_eq!(Difficulty::Medium.attempt_budget(), 10);
        assert_eq!(Difficulty::Hard.attempt_budget(), 5);
    }

    #[test]
    fn parses_keys_case_insensitively() {
        assert_eq!("hard".parse(), Ok(Difficulty::Hard));
        assert_eq!(" Easy ".parse(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse(), Ok(Difficulty::Medium));
        assert_eq!(
            "nightmare".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty)
        );
    }

    #[test]
    fn stored_preference_round_trips() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"Hard\"");
        assert_eq!(serde_json::from_str::<Difficulty>(&json).unwrap(), Difficulty::Hard);
    }

    #[test]
    fn default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
