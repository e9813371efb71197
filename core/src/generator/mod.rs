use crate::*;
pub use random::*;

mod random;

/// One-shot source of a session's secret number.
pub trait SecretGenerator {
    /// Always yields a value in `MIN_NUMBER..=MAX_NUMBER`.
    fn generate(self) -> Number;
}

/// Generator returning a predetermined secret, clamped into range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedSecret(pub Number);

impl SecretGenerator for FixedSecret {
    fn generate(self) -> Number {
        let secret = self.0.clamp(MIN_NUMBER, MAX_NUMBER);
        if secret != self.0 {
            log::warn!(
                "Fixed secret out of range, requested {} but using {}",
                self.0,
                secret
            );
        }
        secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test as test;

    #[test]
    fn fixed_secret_is_clamped_into_range() {
        assert_eq!(FixedSecret(42).generate(), 42);
        assert_eq!(FixedSecret(0).generate(), MIN_NUMBER);
        assert_eq!(FixedSecret(200).generate(), MAX_NUMBER);
    }
}
