//! Pattern-based acceptance of raw operator input.
//!
//! Every validator takes the raw text and returns it unchanged (or parsed,
//! for numbers) when it is acceptable. No validator performs range checks:
//! a negative quantity is still an integer.

pub mod error;

pub use error::*;

use regex::Regex;
use std::sync::LazyLock;

static LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").expect("Invalid letters regex pattern"));

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid digits regex pattern"));

static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 ]+$").expect("Invalid alphanumeric regex pattern"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,6}$")
        .expect("Invalid email regex pattern")
});

fn matching<'a>(field: &str, pattern: &Regex, rule: Rule, value: &'a str) -> Result<&'a str, ValidationError> {
    if value.is_empty() {
        Err(ValidationError::new(field, Rule::NonEmpty))
    } else if pattern.is_match(value) {
        Ok(value)
    } else {
        Err(ValidationError::new(field, rule))
    }
}

/// Letters and spaces. Used for person, restaurant and place names.
pub fn letters<'a>(field: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    matching(field, &LETTERS, Rule::Letters, value)
}

/// Digits only. Phone numbers stay text so leading zeros survive.
pub fn phone<'a>(field: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    matching(field, &DIGITS, Rule::Digits, value)
}

/// Letters, digits and spaces.
pub fn address<'a>(field: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    matching(field, &ALPHANUMERIC, Rule::Alphanumeric, value)
}

/// Anchored `local@domain.tld`, with a 2 to 6 letter final label.
pub fn email<'a>(field: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    matching(field, &EMAIL, Rule::Email, value)
}

/// Anything non-empty.
pub fn free_text<'a>(field: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    if value.is_empty() {
        Err(ValidationError::new(field, Rule::NonEmpty))
    } else {
        Ok(value)
    }
}

/// Signed base-10 integer.
pub fn integer(field: &str, value: &str) -> Result<i64, ValidationError> {
    value
        .parse::<i64>()
        .map_err(|_| ValidationError::new(field, Rule::Integer))
}

/// Finite base-10 decimal. `NaN` and infinities are rejected.
pub fn decimal(field: &str, value: &str) -> Result<f64, ValidationError> {
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(ValidationError::new(field, Rule::Decimal)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_accepts_only_letters_and_spaces() {
        assert_eq!(letters("name", "Jane Doe"), Ok("Jane Doe"));
        assert_eq!(letters("name", " "), Ok(" "));

        for bad in ["J4ne", "Jane-Doe", "O'Neil", "Jane.", "Zoë"] {
            let err = letters("name", bad).unwrap_err();
            assert_eq!(err.rule, Rule::Letters, "{bad} should be rejected");
            assert_eq!(err.field, "name");
        }
    }

    #[test]
    fn test_empty_input_reports_non_empty_rule() {
        assert_eq!(letters("name", "").unwrap_err().rule, Rule::NonEmpty);
        assert_eq!(phone("contact number", "").unwrap_err().rule, Rule::NonEmpty);
        assert_eq!(address("address", "").unwrap_err().rule, Rule::NonEmpty);
        assert_eq!(email("email", "").unwrap_err().rule, Rule::NonEmpty);
        assert_eq!(free_text("meal name", "").unwrap_err().rule, Rule::NonEmpty);
    }

    #[test]
    fn test_phone_keeps_leading_zeros() {
        assert_eq!(phone("contact number", "0821234567"), Ok("0821234567"));
        assert_eq!(phone("contact number", "082 123").unwrap_err().rule, Rule::Digits);
        assert_eq!(phone("contact number", "+27821234567").unwrap_err().rule, Rule::Digits);
        // Non-ASCII digits are not digits here
        assert_eq!(phone("contact number", "١٢٣").unwrap_err().rule, Rule::Digits);
    }

    #[test]
    fn test_address_allows_digits() {
        assert_eq!(address("address", "12 Long Street"), Ok("12 Long Street"));
        assert_eq!(address("address", "12 Long St.").unwrap_err().rule, Rule::Alphanumeric);
    }

    #[test]
    fn test_email_shape() {
        for good in ["jane@example.com", "j.doe+food@mail.co.za", "a_b%c@x-y.museum"] {
            let accepted = email("email", good).unwrap();
            assert_eq!(accepted.matches('@').count(), 1);
            let tld = accepted.rsplit('.').next().unwrap();
            assert!((2..=6).contains(&tld.len()) && tld.chars().all(|c| c.is_ascii_alphabetic()));
        }

        for bad in [
            "jane.example.com",
            "jane@@example.com",
            "jane@exa@mple.com",
            "jane@example.c",
            "jane@example.toolong",
            "jane@example.c0m",
            "jane@example.com ",
            " jane@example.com",
            "jane doe@example.com",
        ] {
            assert_eq!(email("email", bad).unwrap_err().rule, Rule::Email, "{bad} should be rejected");
        }
    }

    #[test]
    fn test_integer_is_signed_and_unranged() {
        assert_eq!(integer("quantity", "3"), Ok(3));
        assert_eq!(integer("quantity", "-2"), Ok(-2));
        assert_eq!(integer("quantity", "+7"), Ok(7));
        assert_eq!(integer("quantity", "2.5").unwrap_err().rule, Rule::Integer);
        assert_eq!(integer("quantity", " 2").unwrap_err().rule, Rule::Integer);
        assert_eq!(integer("quantity", "").unwrap_err().rule, Rule::Integer);
    }

    #[test]
    fn test_decimal_rejects_non_finite() {
        assert_eq!(decimal("price", "49.99"), Ok(49.99));
        assert_eq!(decimal("price", "-1"), Ok(-1.0));
        assert_eq!(decimal("price", "5"), Ok(5.0));
        for bad in ["NaN", "inf", "-infinity", "abc", "1,5", ""] {
            assert_eq!(decimal("price", bad).unwrap_err().rule, Rule::Decimal, "{bad} should be rejected");
        }
    }
}
