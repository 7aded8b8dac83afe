use crate::domain::types::CourseTeacher;
use crate::dto::course_teacher::{CourseTeacherRequest, CourseTeacherResponse};
use crate::mapper::Mapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct CourseTeacherMapper;

impl Mapper for CourseTeacherMapper {
    type Record = CourseTeacher;
    type Request = CourseTeacherRequest;
    type Response = CourseTeacherResponse;

    fn to_record(&self, request: CourseTeacherRequest) -> CourseTeacher {
        CourseTeacher {
            id: None,
            course_id: request.course_id.unwrap_or_default(),
            teacher_id: request.teacher_id.unwrap_or_default(),
        }
    }

    fn to_response(&self, record: CourseTeacher) -> CourseTeacherResponse {
        CourseTeacherResponse {
            id: record.id.unwrap_or_default(),
            course_id: record.course_id,
            teacher_id: record.teacher_id,
        }
    }

    fn update_from_request(&self, request: CourseTeacherRequest, record: &mut CourseTeacher) {
        record.course_id = request.course_id.unwrap_or_default();
        record.teacher_id = request.teacher_id.unwrap_or_default();
    }
}
