use serde::{Deserialize, Serialize};

/// A guessable value, also used for attempt counts.
pub type Number = u8;

/// Smallest value the secret can take.
pub const MIN_NUMBER: Number = 1;

/// Largest value the secret can take.
pub const MAX_NUMBER: Number = 100;

/// Classification of a single guess against the secret.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Low,
    High,
    Correct,
}

impl Verdict {
    pub fn classify(guess: Number, secret: Number) -> Self {
        use core::cmp::Ordering::*;
        match guess.cmp(&secret) {
            Less => Self::Low,
            Greater => Self::High,
            Equal => Self::Correct,
        }
    }

    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub value: Number,
    pub verdict: Verdict,
}

/// Picks "attempt" or "attempts" for `count`.
pub(crate) const fn attempts_noun(count: Number) -> &'static str {
    if count == 1 { "attempt" } else { "attempts" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test as test;

    #[test]
    fn classify_orders_guess_against_secret() {
        assert_eq!(Verdict::classify(10, 42), Verdict::Low);
        assert_eq!(Verdict::classify(90, 42), Verdict::High);
        assert_eq!(Verdict::classify(42, 42), Verdict::Correct);
        assert!(Verdict::classify(MAX_NUMBER, MAX_NUMBER).is_correct());
    }

    #[test]
    fn attempts_noun_is_singular_only_for_one() {
        assert_eq!(attempts_noun(0), "attempts");
        assert_eq!(attempts_noun(1), "attempt");
        assert_eq!(attempts_noun(2), "attempts");
    }
}
