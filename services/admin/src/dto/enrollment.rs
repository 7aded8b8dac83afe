use serde::{Deserialize, Serialize};

use testify_domain::validation::{Constraint, Field, FieldValue, Validate};

use super::not_null;

const COURSE_ID: &[Constraint] = &[not_null("Course id must not be null")];
const STUDENT_ID: &[Constraint] = &[not_null("Student id must not be null")];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRequest {
    pub course_id: Option<i32>,
    pub student_id: Option<i32>,
}

impl Validate for EnrollmentRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("courseId", FieldValue::presence(&self.course_id), COURSE_ID),
            Field::new("studentId", FieldValue::presence(&self.student_id), STUDENT_ID),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentResponse {
    pub id: i32,
    pub course_id: i32,
    pub student_id: i32,
}
