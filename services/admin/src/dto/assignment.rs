use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use testify_domain::validation::{Constraint, Field, FieldValue, Validate};

use super::{length, not_empty, not_null};

const COURSE_ID: &[Constraint] = &[not_null("Course id must not be null")];

const ASSIGNMENT_NAME: &[Constraint] = &[
    not_null("Assignment name must not be null"),
    not_empty("Assignment name must not be empty"),
    length(1, 255, "Assignment name size must be between 1 and 255"),
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    pub course_id: Option<i32>,
    pub assignment_name: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub autotester_id: Option<i32>,
}

impl Validate for AssignmentRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("courseId", FieldValue::presence(&self.course_id), COURSE_ID),
            Field::new(
                "assignmentName",
                FieldValue::text(&self.assignment_name),
                ASSIGNMENT_NAME,
            ),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResponse {
    pub id: i32,
    pub course_id: i32,
    pub assignment_name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub autotester_id: Option<i32>,
}
