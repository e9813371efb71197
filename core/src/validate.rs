use crate::*;

/// Checks a raw guess against the input rules, first failing rule wins:
/// blank, not a number, not whole, out of range.
pub fn validate_guess(raw: &str) -> core::result::Result<Number, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::Empty);
    }

    let value = parse_number(raw)?;

    if !is_whole(value) {
        return Err(InputError::NotWhole);
    }

    if value < f64::from(MIN_NUMBER) || value > f64::from(MAX_NUMBER) {
        return Err(InputError::OutOfRange);
    }

    Ok(value as Number)
}

/// Reads `raw` with browser number rules: the only spelled-out value is
/// `Infinity`, and a `0x`/`0b`/`0o` literal reads as its leading zero.
fn parse_number(raw: &str) -> core::result::Result<f64, InputError> {
    match raw {
        "Infinity" | "+Infinity" => return Ok(f64::INFINITY),
        "-Infinity" => return Ok(f64::NEG_INFINITY),
        _ => {}
    }

    if is_radix_literal(raw) {
        return Ok(0.0);
    }

    // `e` is the exponent marker, any other letter spells inf/nan
    if raw
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && !b.eq_ignore_ascii_case(&b'e'))
    {
        return Err(InputError::NotANumber);
    }

    raw.parse().map_err(|_| InputError::NotANumber)
}

fn is_radix_literal(raw: &str) -> bool {
    let radix = match raw.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return false,
    };
    let digits = &raw[2..];
    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}

/// Every finite float at or above 2^53 in magnitude has no fractional part.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

fn is_whole(value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    value >= EXACT_INTEGER_LIMIT || value <= -EXACT_INTEGER_LIMIT || value == (value as i64) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test as test;

    #[test]
    fn rules_apply_in_order() {
        assert_eq!(validate_guess(""), Err(InputError::Empty));
        assert_eq!(validate_guess("  "), Err(InputError::Empty));
        assert_eq!(validate_guess("abc"), Err(InputError::NotANumber));
        assert_eq!(validate_guess("3.5"), Err(InputError::NotWhole));
        assert_eq!(validate_guess("150"), Err(InputError::OutOfRange));
        assert_eq!(validate_guess("57"), Ok(57));
    }

    #[test]
    fn messages_match_player_text() {
        use alloc::string::ToString;

        assert_eq!(InputError::Empty.to_string(), "Please enter a number");
        assert_eq!(
            InputError::NotANumber.to_string(),
            "Input must be a valid number"
        );
        assert_eq!(InputError::NotWhole.to_string(), "Please enter a whole number");
        assert_eq!(
            InputError::OutOfRange.to_string(),
            "Number must be between 1 and 100"
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(validate_guess("1"), Ok(1));
        assert_eq!(validate_guess("100"), Ok(100));
        assert_eq!(validate_guess("0"), Err(InputError::OutOfRange));
        assert_eq!(validate_guess("101"), Err(InputError::OutOfRange));
        assert_eq!(validate_guess("-5"), Err(InputError::OutOfRange));
    }

    #[test]
    fn numeric_spellings_are_accepted_when_whole() {
        assert_eq!(validate_guess(" 42 "), Ok(42));
        assert_eq!(validate_guess("+7"), Ok(7));
        assert_eq!(validate_guess("12.0"), Ok(12));
        assert_eq!(validate_guess("1e2"), Ok(100));
    }

    #[test]
    fn odd_numbers_are_classified() {
        assert_eq!(validate_guess("NaN"), Err(InputError::NotANumber));
        assert_eq!(validate_guess("1 2"), Err(InputError::NotANumber));
        assert_eq!(validate_guess("Infinity"), Err(InputError::NotWhole));
        assert_eq!(validate_guess("-Infinity"), Err(InputError::NotWhole));
        assert_eq!(validate_guess("-0.5"), Err(InputError::NotWhole));
        assert_eq!(validate_guess("1e300"), Err(InputError::OutOfRange));
    }

    #[test]
    fn only_exact_infinity_spelling_is_numeric() {
        assert_eq!(validate_guess("inf"), Err(InputError::NotANumber));
        assert_eq!(validate_guess("INF"), Err(InputError::NotANumber));
        assert_eq!(validate_guess("infinity"), Err(InputError::NotANumber));
        assert_eq!(validate_guess("nan"), Err(InputError::NotANumber));
        assert_eq!(validate_guess("1.5f"), Err(InputError::NotANumber));
        assert_eq!(validate_guess("e"), Err(InputError::NotANumber));
    }

    #[test]
    fn radix_literals_read_as_zero() {
        assert_eq!(validate_guess("0x10"), Err(InputError::OutOfRange));
        assert_eq!(validate_guess("0B101"), Err(InputError::OutOfRange));
        assert_eq!(validate_guess("0o7"), Err(InputError::OutOfRange));
        assert_eq!(validate_guess("0x"), Err(InputError::NotANumber));
        assert_eq!(validate_guess("0xZZ"), Err(InputError::NotANumber));
        assert_eq!(validate_guess("-0x10"), Err(InputError::NotANumber));
    }
}
