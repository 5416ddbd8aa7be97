//! Declarative constraints, the platform tier of validation.

use regex::Regex;

use crate::datetime::parse_datetime_local;
use crate::input::InputKind;
use crate::validity::ValidityState;

/// Declarative constraints attached to an input, mirroring the HTML5
/// constraint attributes (`required`, `minlength`, `min`, `pattern`, ...).
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    /// The input must be non-empty.
    pub required: bool,
    /// Minimum value length in bytes.
    pub min_length: Option<usize>,
    /// Maximum value length in bytes.
    pub max_length: Option<usize>,
    /// Minimum numeric value.
    pub min: Option<f64>,
    /// Maximum numeric value.
    pub max: Option<f64>,
    /// Pattern the whole value must match.
    pub pattern: Option<Regex>,
}

impl Constraints {
    /// Checks `value` against these constraints for an input of `kind`,
    /// producing a fresh validity state.
    ///
    /// An empty optional value is valid: only `required` constrains
    /// emptiness, every other check defers until a value is present.
    pub fn check(&self, kind: InputKind, value: &str) -> ValidityState {
        let mut validity = ValidityState::default();

        if self.required && value.is_empty() {
            validity.value_missing = true;
            return validity;
        }
        if value.is_empty() {
            return validity;
        }

        match kind {
            InputKind::Email => {
                if !is_email_like(value) {
                    validity.type_mismatch = true;
                }
            }
            InputKind::Url => {
                if !value.starts_with("http://") && !value.starts_with("https://") {
                    validity.type_mismatch = true;
                }
            }
            InputKind::Number => match value.parse::<f64>() {
                Ok(n) => {
                    if self.min.is_some_and(|min| n < min) {
                        validity.range_underflow = true;
                    }
                    if self.max.is_some_and(|max| n > max) {
                        validity.range_overflow = true;
                    }
                }
                Err(_) => validity.bad_input = true,
            },
            InputKind::DatetimeLocal => {
                if parse_datetime_local(value).is_none() {
                    validity.bad_input = true;
                }
            }
            _ => {}
        }

        if self.min_length.is_some_and(|min| value.len() < min) {
            validity.too_short = true;
        }
        if self.max_length.is_some_and(|max| value.len() > max) {
            validity.too_long = true;
        }
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                validity.pattern_mismatch = true;
            }
        }

        validity
    }
}

fn is_email_like(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let c = Constraints {
            required: true,
            ..Constraints::default()
        };
        assert!(c.check(InputKind::Text, "").value_missing);
        assert!(c.check(InputKind::Text, "x").is_valid());
    }

    #[test]
    fn test_empty_optional_is_valid() {
        let c = Constraints {
            min_length: Some(5),
            ..Constraints::default()
        };
        assert!(c.check(InputKind::Text, "").is_valid());
        assert!(c.check(InputKind::Email, "").is_valid());
    }

    #[test]
    fn test_email_type_mismatch() {
        let c = Constraints::default();
        assert!(c.check(InputKind::Email, "user@example.com").is_valid());
        assert!(c.check(InputKind::Email, "invalid").type_mismatch);
        assert!(c.check(InputKind::Email, "@example.com").type_mismatch);
    }

    #[test]
    fn test_number_range() {
        let c = Constraints {
            min: Some(0.0),
            max: Some(100.0),
            ..Constraints::default()
        };
        assert!(c.check(InputKind::Number, "50").is_valid());
        assert!(c.check(InputKind::Number, "-1").range_underflow);
        assert!(c.check(InputKind::Number, "101").range_overflow);
        assert!(c.check(InputKind::Number, "abc").bad_input);
    }

    #[test]
    fn test_datetime_bad_input() {
        let c = Constraints::default();
        assert!(c.check(InputKind::DatetimeLocal, "2025-01-01T10:00").is_valid());
        assert!(c.check(InputKind::DatetimeLocal, "not-a-date").bad_input);
    }

    #[test]
    fn test_length_bounds() {
        let c = Constraints {
            min_length: Some(3),
            max_length: Some(5),
            ..Constraints::default()
        };
        assert!(c.check(InputKind::Text, "abcd").is_valid());
        assert!(c.check(InputKind::Text, "ab").too_short);
        assert!(c.check(InputKind::Text, "abcdef").too_long);
    }

    #[test]
    fn test_pattern() {
        let c = Constraints {
            pattern: Some(Regex::new(r"^\d{4}$").unwrap()),
            ..Constraints::default()
        };
        assert!(c.check(InputKind::Text, "1234").is_valid());
        assert!(c.check(InputKind::Text, "12a4").pattern_mismatch);
    }
}
