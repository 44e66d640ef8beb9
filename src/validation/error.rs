//! Validation error type.

use std::fmt;
use thiserror::Error;

/// The acceptance rule a raw value failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The value was empty.
    NonEmpty,
    /// Letters and spaces only.
    Letters,
    /// Digits only.
    Digits,
    /// Letters, digits and spaces only.
    Alphanumeric,
    /// `local@domain.tld` shape.
    Email,
    /// Base-10 integer.
    Integer,
    /// Finite base-10 decimal.
    Decimal,
}

impl Rule {
    /// Operator-facing hint describing what the rule accepts.
    pub fn hint(self) -> &'static str {
        match self {
            Rule::NonEmpty => "Please enter a value.",
            Rule::Letters => "Please enter letters only.",
            Rule::Digits => "Please enter numbers only.",
            Rule::Alphanumeric => "Please enter letters and numbers only.",
            Rule::Email => "Please enter a valid email address.",
            Rule::Integer => "Please enter a valid integer.",
            Rule::Decimal => "Please enter a valid number.",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hint())
    }
}

/// A raw field value was rejected.
///
/// The display form is what the operator sees, e.g.
/// `Invalid contact number. Please enter numbers only.`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field}. {rule}")]
pub struct ValidationError {
    /// Human-readable field name ("name", "contact number", ...).
    pub field: String,
    /// The rule that was violated.
    pub rule: Rule,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, rule: Rule) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field_and_rule() {
        let error = ValidationError::new("email", Rule::Email);
        assert_eq!(error.to_string(), "Invalid email. Please enter a valid email address.");
    }
}
