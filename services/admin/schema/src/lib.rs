//! sea-orm entities for the Testify admin schema. One module per table.

pub mod app_user;
pub mod assignment;
pub mod autotester;
pub mod configuration;
pub mod course;
pub mod course_teacher;
pub mod enrollment;
pub mod grading_element;
pub mod student_assignment;
pub mod student_grading_element;
pub mod user_role;
