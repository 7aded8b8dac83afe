use serde::{Deserialize, Serialize};

use testify_domain::validation::{Constraint, Field, FieldValue, Validate};

use super::not_null;

const COURSE_ID: &[Constraint] = &[not_null("Course id must not be null")];
const TEACHER_ID: &[Constraint] = &[not_null("Teacher id must not be null")];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseTeacherRequest {
    pub course_id: Option<i32>,
    pub teacher_id: Option<i32>,
}

impl Validate for CourseTeacherRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("courseId", FieldValue::presence(&self.course_id), COURSE_ID),
            Field::new("teacherId", FieldValue::presence(&self.teacher_id), TEACHER_ID),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseTeacherResponse {
    pub id: i32,
    pub course_id: i32,
    pub teacher_id: i32,
}
