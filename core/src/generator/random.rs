use super::*;

/// Draws the secret uniformly from the guessable range with a seeded RNG.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomSecretGenerator {
    seed: u64,
}

impl RandomSecretGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl SecretGenerator for RandomSecretGenerator {
    fn generate(self) -> Number {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        rng.random_range(MIN_NUMBER..=MAX_NUMBER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test as test;

    #[test]
    fn same_seed_same_secret() {
        let a = RandomSecretGenerator::new(0xdead_beef).generate();
        let b = RandomSecretGenerator::new(0xdead_beef).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn secrets_stay_in_range() {
        for seed in 0..500 {
            let secret = RandomSecretGenerator::new(seed).generate();
            assert!((MIN_NUMBER..=MAX_NUMBER).contains(&secret), "seed {seed}");
        }
    }
}
