use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use testify_domain::validation::{Constraint, Field, FieldValue, Validate};

use super::{MAX_SCORE, SCORE_DIGITS, length, not_empty, not_null};

const ASSIGNMENT_ID: &[Constraint] = &[not_null("Assignment id must not be null")];

const ELEMENT_NAME: &[Constraint] = &[
    not_null("Element name must not be null"),
    not_empty("Element name must not be empty"),
    length(1, 255, "Element name size must be between 1 and 255"),
];

const MAX_POINTS: &[Constraint] = &[
    not_null("Max points must not be null"),
    Constraint::DecimalRange {
        min: Decimal::ZERO,
        max: MAX_SCORE,
        message: "Max points must be between 0 and 999.99",
    },
    Constraint::Digits {
        integer: SCORE_DIGITS.0,
        fraction: SCORE_DIGITS.1,
        message: "Max points must have at most 3 integer and 2 fraction digits",
    },
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingElementRequest {
    pub assignment_id: Option<i32>,
    pub element_name: Option<String>,
    pub description: Option<String>,
    pub max_points: Option<Decimal>,
    pub is_deduction: Option<bool>,
}

impl Validate for GradingElementRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new(
                "assignmentId",
                FieldValue::presence(&self.assignment_id),
                ASSIGNMENT_ID,
            ),
            Field::new(
                "elementName",
                FieldValue::text(&self.element_name),
                ELEMENT_NAME,
            ),
            Field::new(
                "maxPoints",
                FieldValue::decimal(&self.max_points),
                MAX_POINTS,
            ),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingElementResponse {
    pub id: i32,
    pub assignment_id: i32,
    pub element_name: String,
    pub description: Option<String>,
    pub max_points: Decimal,
    pub is_deduction: bool,
}
