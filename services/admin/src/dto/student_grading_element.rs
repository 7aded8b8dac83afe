use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use testify_domain::validation::{Constraint, Field, FieldValue, Validate};

use super::{SCORE_DIGITS, not_null};

const STUDENT_ASSIGNMENT_ID: &[Constraint] = &[not_null("Student assignment id must not be null")];
const GRADING_ELEMENT_ID: &[Constraint] = &[not_null("Grading element id must not be null")];

const POINTS_AWARDED: &[Constraint] = &[
    not_null("Points awarded must not be null"),
    Constraint::Digits {
        integer: SCORE_DIGITS.0,
        fraction: SCORE_DIGITS.1,
        message: "Points awarded must have at most 3 integer and 2 fraction digits",
    },
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentGradingElementRequest {
    pub student_assignment_id: Option<i32>,
    pub grading_element_id: Option<i32>,
    pub points_awarded: Option<Decimal>,
    pub feedback: Option<String>,
}

impl Validate for StudentGradingElementRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new(
                "studentAssignmentId",
                FieldValue::presence(&self.student_assignment_id),
                STUDENT_ASSIGNMENT_ID,
            ),
            Field::new(
                "gradingElementId",
                FieldValue::presence(&self.grading_element_id),
                GRADING_ELEMENT_ID,
            ),
            Field::new(
                "pointsAwarded",
                FieldValue::decimal(&self.points_awarded),
                POINTS_AWARDED,
            ),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentGradingElementResponse {
    pub id: i32,
    pub student_assignment_id: i32,
    pub grading_element_id: i32,
    pub points_awarded: Decimal,
    pub feedback: Option<String>,
}
