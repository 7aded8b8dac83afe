use serde::{Deserialize, Serialize};

use testify_domain::validation::{Constraint, Field, FieldValue, Validate};

use super::{length, not_empty, not_null};

const COURSE_NAME: &[Constraint] = &[
    not_null("Course name must not be null"),
    not_empty("Course name must not be empty"),
    length(1, 255, "Course name size must be between 1 and 255"),
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub course_name: Option<String>,
    pub description: Option<String>,
}

impl Validate for CourseRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new(
            "courseName",
            FieldValue::text(&self.course_name),
            COURSE_NAME,
        )]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: i32,
    pub course_name: String,
    pub description: Option<String>,
}
