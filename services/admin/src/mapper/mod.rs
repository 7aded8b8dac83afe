//! Conversions between request/response bodies and domain records.
//!
//! Mappers are stateless and never touch storage. Required request fields are
//! guaranteed present by validation before a mapper sees the request.

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

pub use app_user::AppUserMapper;
pub use assignment::AssignmentMapper;
pub use autotester::AutotesterMapper;
pub use configuration::ConfigurationMapper;
pub use course::CourseMapper;
pub use course_teacher::CourseTeacherMapper;
pub use enrollment::EnrollmentMapper;
pub use grading_element::GradingElementMapper;
pub use student_assignment::StudentAssignmentMapper;
pub use student_grading_element::StudentGradingElementMapper;
pub use user_role::UserRoleMapper;

pub trait Mapper: Send + Sync {
    type Record;
    type Request;
    type Response;

    /// New record with no id.
    fn to_record(&self, request: Self::Request) -> Self::Record;

    fn to_response(&self, record: Self::Record) -> Self::Response;

    fn to_response_list(&self, records: Vec<Self::Record>) -> Vec<Self::Response> {
        records.into_iter().map(|r| self.to_response(r)).collect()
    }

    /// Overwrite every mutable attribute of `record`. The id is left alone.
    fn update_from_request(&self, request: Self::Request, record: &mut Self::Record);
}
