use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use testify_domain::validation::{Constraint, Field, FieldValue, Validate};

use super::{MAX_SCORE, SCORE_DIGITS, not_null};

const STUDENT_ID: &[Constraint] = &[not_null("Student id must not be null")];
const ASSIGNMENT_ID: &[Constraint] = &[not_null("Assignment id must not be null")];

const SUBMISSION_URL: &[Constraint] = &[Constraint::Url {
    message: "Submission URL must be a valid URL",
}];

const GRADE: &[Constraint] = &[
    Constraint::DecimalRange {
        min: Decimal::ZERO,
        max: MAX_SCORE,
        message: "Grade must be between 0 and 999.99",
    },
    Constraint::Digits {
        integer: SCORE_DIGITS.0,
        fraction: SCORE_DIGITS.1,
        message: "Grade must have at most 3 integer and 2 fraction digits",
    },
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAssignmentRequest {
    pub student_id: Option<i32>,
    pub assignment_id: Option<i32>,
    pub submission_url: Option<String>,
    pub grade: Option<Decimal>,
    pub feedback: Option<String>,
    pub submission_date: Option<NaiveDate>,
}

impl Validate for StudentAssignmentRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("studentId", FieldValue::presence(&self.student_id), STUDENT_ID),
            Field::new(
                "assignmentId",
                FieldValue::presence(&self.assignment_id),
                ASSIGNMENT_ID,
            ),
            Field::new(
                "submissionUrl",
                FieldValue::text(&self.submission_url),
                SUBMISSION_URL,
            ),
            Field::new("grade", FieldValue::decimal(&self.grade), GRADE),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAssignmentResponse {
    pub id: i32,
    pub student_id: i32,
    pub assignment_id: i32,
    pub submission_url: Option<String>,
    pub grade: Option<Decimal>,
    pub feedback: Option<String>,
    pub submission_date: Option<NaiveDate>,
}
