//! Parsing of the free-form deposits text input.
//!
//! The parse is lenient: leading whitespace is skipped and the longest
//! leading decimal number is read, so `"75.5B"` yields `75.5`. Trailing text
//! is ignored. The result must be finite and strictly positive.

use crate::error::InputError;

/// Parse user text into a deposits value in billions.
pub fn parse_deposits_input(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim_start();
    if trimmed.trim_end().is_empty() {
        return Err(InputError::Empty);
    }

    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned.starts_with("Infinity") && trimmed.len() - unsigned.len() <= 1 {
        return Err(InputError::NotFinite);
    }

    let number = leading_number(trimmed).ok_or_else(|| InputError::NotANumber(text.to_string()))?;
    let value: f64 = number
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;

    if !value.is_finite() {
        return Err(InputError::NotFinite);
    }
    if value <= 0.0 {
        return Err(InputError::NotPositive);
    }
    Ok(value)
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][(e|E)[+-]digits]`.
fn leading_number(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_deposits_input("75.5"), Ok(75.5));
        assert_eq!(parse_deposits_input("  80 "), Ok(80.0));
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        assert_eq!(parse_deposits_input("75.5B"), Ok(75.5));
        assert_eq!(parse_deposits_input("12abc"), Ok(12.0));
    }

    #[test]
    fn test_parse_short_forms() {
        assert_eq!(parse_deposits_input(".5"), Ok(0.5));
        assert_eq!(parse_deposits_input("5."), Ok(5.0));
        assert_eq!(parse_deposits_input("+3"), Ok(3.0));
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(parse_deposits_input("1e2"), Ok(100.0));
        assert_eq!(parse_deposits_input("1.5E-1"), Ok(0.15));
        // dangling exponent marker is trailing text
        assert_eq!(parse_deposits_input("7e"), Ok(7.0));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(parse_deposits_input(""), Err(InputError::Empty));
        assert_eq!(parse_deposits_input("   "), Err(InputError::Empty));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_deposits_input("abc"),
            Err(InputError::NotANumber(_))
        ));
        assert!(matches!(
            parse_deposits_input("."),
            Err(InputError::NotANumber(_))
        ));
        assert!(matches!(
            parse_deposits_input("-"),
            Err(InputError::NotANumber(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert_eq!(parse_deposits_input("0"), Err(InputError::NotPositive));
        assert_eq!(parse_deposits_input("-5"), Err(InputError::NotPositive));
        assert_eq!(parse_deposits_input("-0"), Err(InputError::NotPositive));
    }

    #[test]
    fn test_parse_rejects_infinite() {
        assert_eq!(parse_deposits_input("Infinity"), Err(InputError::NotFinite));
        assert_eq!(parse_deposits_input("1e999"), Err(InputError::NotFinite));
    }

    #[test]
    fn test_parse_rejects_nan_text() {
        assert!(matches!(
            parse_deposits_input("NaN"),
            Err(InputError::NotANumber(_))
        ));
    }
}
