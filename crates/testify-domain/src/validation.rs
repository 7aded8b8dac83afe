//! Declarative field constraints and the pass that evaluates them.
//!
//! Constraints are plain data: a request type lists its fields in declaration
//! order, each with its current value and a static table of [`Constraint`]s.
//! [`Validate::validate`] walks that list and reports one [`Violation`] per
//! failed constraint, preserving field order and then constraint order.
//!
//! A missing value satisfies every constraint except [`Constraint::NotNull`]
//! and [`Constraint::NotEmpty`].

use rust_decimal::Decimal;
use validator::{ValidateEmail, ValidateLength, ValidateUrl};

/// A single constraint on a request field, carrying the message reported when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Value must be present.
    NotNull { message: &'static str },
    /// Value must be present and, for text, contain at least one character.
    NotEmpty { message: &'static str },
    /// Text length in characters must lie in `min..=max`.
    Length {
        min: u64,
        max: u64,
        message: &'static str,
    },
    /// Text must be a syntactically valid e-mail address.
    Email { message: &'static str },
    /// Text must be an absolute URL.
    Url { message: &'static str },
    /// Decimal must lie in `min..=max`.
    DecimalRange {
        min: Decimal,
        max: Decimal,
        message: &'static str,
    },
    /// Decimal must fit `integer` whole digits and `fraction` fractional digits.
    Digits {
        integer: u32,
        fraction: u32,
        message: &'static str,
    },
}

impl Constraint {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotNull { message }
            | Self::NotEmpty { message }
            | Self::Length { message, .. }
            | Self::Email { message }
            | Self::Url { message }
            | Self::DecimalRange { message, .. }
            | Self::Digits { message, .. } => message,
        }
    }

    /// Returns `true` when `value` satisfies this constraint.
    pub fn is_satisfied_by(&self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (Self::NotNull { .. }, value) => !value.is_null(),
            (Self::NotEmpty { .. }, FieldValue::Text(text)) => text.is_some_and(|s| !s.is_empty()),
            (Self::NotEmpty { .. }, value) => !value.is_null(),
            (Self::Length { min, max, .. }, FieldValue::Text(Some(text))) => {
                text.validate_length(Some(*min), Some(*max), None)
            }
            (Self::Email { .. }, FieldValue::Text(Some(text))) => text.validate_email(),
            (Self::Url { .. }, FieldValue::Text(Some(text))) => text.validate_url(),
            (Self::DecimalRange { min, max, .. }, FieldValue::Decimal(Some(d))) => {
                min <= d && d <= max
            }
            (
                Self::Digits {
                    integer, fraction, ..
                },
                FieldValue::Decimal(Some(d)),
            ) => fits_digits(*d, *integer, *fraction),
            // Remaining pairs are either absent values or constraints that do not
            // apply to the value's shape.
            _ => true,
        }
    }
}

fn fits_digits(value: Decimal, integer: u32, fraction: u32) -> bool {
    let normalized = value.normalize();
    if normalized.scale() > fraction {
        return false;
    }
    // A bound past the range of `Decimal` admits every value.
    let Some(bound) = 10i128
        .checked_pow(integer)
        .and_then(|b| Decimal::try_from_i128_with_scale(b, 0).ok())
    else {
        return true;
    };
    normalized.trunc().abs() < bound
}

/// The current value of a request field, as seen by the validator.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(Option<&'a String>),
    Decimal(Option<Decimal>),
    /// Any other field type; only presence is checked.
    Present(bool),
}

impl<'a> FieldValue<'a> {
    pub fn text(value: &'a Option<String>) -> Self {
        Self::Text(value.as_ref())
    }

    pub fn decimal(value: &Option<Decimal>) -> Self {
        Self::Decimal(*value)
    }

    pub fn presence<T>(value: &Option<T>) -> Self {
        Self::Present(value.is_some())
    }

    pub fn is_null(&self) -> bool {
        match self {
            Self::Text(v) => v.is_none(),
            Self::Decimal(v) => v.is_none(),
            Self::Present(present) => !present,
        }
    }
}

/// A named request field with its value and constraint table.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub name: &'static str,
    pub value: FieldValue<'a>,
    pub constraints: &'static [Constraint],
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: FieldValue<'a>, constraints: &'static [Constraint]) -> Self {
        Self {
            name,
            value,
            constraints,
        }
    }
}

/// One failed constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

/// Implemented by request types that carry declarative constraints.
pub trait Validate {
    /// Fields in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;

    fn validate(&self) -> Result<(), Vec<Violation>> {
        let violations: Vec<Violation> = self
            .fields()
            .into_iter()
            .flat_map(|field| {
                field
                    .constraints
                    .iter()
                    .filter(move |c| !c.is_satisfied_by(&field.value))
                    .map(move |c| Violation {
                        field: field.name,
                        message: c.message(),
                    })
            })
            .collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: &[Constraint] = &[
        Constraint::NotNull {
            message: "name must not be null",
        },
        Constraint::NotEmpty {
            message: "name must not be empty",
        },
        Constraint::Length {
            min: 1,
            max: 5,
            message: "name size must be between 1 and 5",
        },
    ];

    const POINTS: &[Constraint] = &[
        Constraint::DecimalRange {
            min: Decimal::ZERO,
            max: Decimal::ONE_HUNDRED,
            message: "points must be between 0 and 100",
        },
        Constraint::Digits {
            integer: 3,
            fraction: 2,
            message: "points must have at most 2 decimals",
        },
    ];

    const CONTACT: &[Constraint] = &[Constraint::Email {
        message: "contact must be an e-mail address",
    }];

    const HOMEPAGE: &[Constraint] = &[Constraint::Url {
        message: "homepage must be a URL",
    }];

    struct Sample {
        name: Option<String>,
        points: Option<Decimal>,
        contact: Option<String>,
        homepage: Option<String>,
    }

    impl Sample {
        fn valid() -> Self {
            Self {
                name: Some("abc".into()),
                points: Some(Decimal::new(1050, 2)),
                contact: Some("teacher@example.com".into()),
                homepage: Some("https://gitlab.example.com/course".into()),
            }
        }
    }

    impl Validate for Sample {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("name", FieldValue::text(&self.name), NAME),
                Field::new("points", FieldValue::decimal(&self.points), POINTS),
                Field::new("contact", FieldValue::text(&self.contact), CONTACT),
                Field::new("homepage", FieldValue::text(&self.homepage), HOMEPAGE),
            ]
        }
    }

    fn messages(sample: &Sample) -> Vec<&'static str> {
        match sample.validate() {
            Ok(()) => vec![],
            Err(v) => v.into_iter().map(|v| v.message).collect(),
        }
    }

    #[test]
    fn should_accept_valid_sample() {
        assert!(Sample::valid().validate().is_ok());
    }

    #[test]
    fn should_report_null_and_empty_for_missing_text() {
        let sample = Sample {
            name: None,
            ..Sample::valid()
        };
        assert_eq!(
            messages(&sample),
            vec!["name must not be null", "name must not be empty"]
        );
    }

    #[test]
    fn should_report_empty_and_length_for_empty_text() {
        let sample = Sample {
            name: Some(String::new()),
            ..Sample::valid()
        };
        assert_eq!(
            messages(&sample),
            vec!["name must not be empty", "name size must be between 1 and 5"]
        );
    }

    #[test]
    fn should_count_characters_not_bytes() {
        let sample = Sample {
            name: Some("äääää".into()),
            ..Sample::valid()
        };
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn should_report_length_only_for_long_text() {
        let sample = Sample {
            name: Some("abcdef".into()),
            ..Sample::valid()
        };
        assert_eq!(messages(&sample), vec!["name size must be between 1 and 5"]);
    }

    #[test]
    fn should_check_decimal_range_and_digits() {
        let too_big = Sample {
            points: Some(Decimal::new(10001, 2)),
            ..Sample::valid()
        };
        assert_eq!(messages(&too_big), vec!["points must be between 0 and 100"]);

        let too_precise = Sample {
            points: Some(Decimal::new(1001, 3)),
            ..Sample::valid()
        };
        assert_eq!(
            messages(&too_precise),
            vec!["points must have at most 2 decimals"]
        );
    }

    #[test]
    fn should_ignore_trailing_zeros_when_counting_digits() {
        let sample = Sample {
            points: Some(Decimal::new(10500, 3)),
            ..Sample::valid()
        };
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn should_accept_any_whole_part_for_wide_digit_bounds() {
        for integer in [29, 40, u32::MAX] {
            assert!(fits_digits(Decimal::MAX, integer, 0));
        }
        // Decimal::MAX has 29 whole digits.
        assert!(!fits_digits(Decimal::MAX, 20, 0));
        assert!(!fits_digits(Decimal::MAX, 28, 0));
        assert!(fits_digits(Decimal::new(99_999, 0), 20, 2));
        assert!(!fits_digits(Decimal::new(1_000, 0), 3, 2));
    }

    #[test]
    fn should_allow_absent_optional_values() {
        let sample = Sample {
            points: None,
            contact: None,
            homepage: None,
            ..Sample::valid()
        };
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn should_reject_malformed_email_and_url() {
        let sample = Sample {
            contact: Some("not-an-address".into()),
            homepage: Some("gitlab".into()),
            ..Sample::valid()
        };
        assert_eq!(
            messages(&sample),
            vec!["contact must be an e-mail address", "homepage must be a URL"]
        );
    }

    #[test]
    fn should_report_violations_in_declaration_order() {
        let sample = Sample {
            name: None,
            points: Some(Decimal::new(-1, 0)),
            contact: Some("x".into()),
            homepage: None,
        };
        let fields: Vec<&str> = sample
            .validate()
            .unwrap_err()
            .into_iter()
            .map(|v| v.field)
            .collect();
        assert_eq!(fields, vec!["name", "name", "points", "contact"]);
    }
}
