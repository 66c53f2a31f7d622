//! Free-text amount parsing
//!
//! Every amount in the application arrives as user-entered text. This
//! helper is the single validation path: it must parse as a number and
//! must be a non-negative, finite value.

use crate::error::{TrackerError, TrackerResult};

/// Parse a user-entered amount string
///
/// Accepts plain decimal numbers ("100", "99.95"). Rejects anything that
/// does not parse, plus negative and non-finite values.
pub fn parse_amount(input: &str) -> TrackerResult<f64> {
    let trimmed = input.trim();

    let amount: f64 = trimmed
        .parse()
        .map_err(|_| TrackerError::invalid_amount(trimmed))?;

    if !amount.is_finite() {
        return Err(TrackerError::invalid_amount(trimmed));
    }

    if amount < 0.0 {
        return Err(TrackerError::Validation(format!(
            "Amount must not be negative, got {}.",
            trimmed
        )));
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_amount("100").unwrap(), 100.0);
        assert_eq!(parse_amount("99.95").unwrap(), 99.95);
        assert_eq!(parse_amount("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_amount(" 42.5 ").unwrap(), 42.5);
    }

    #[test]
    fn test_parse_rejects_text() {
        let err = parse_amount("abc").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("   ").is_err());
    }

    #[test]
    fn test_parse_rejects_negative() {
        let err = parse_amount("-5").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }
}
