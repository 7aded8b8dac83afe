use crate::domain::types::Course;
use crate::dto::course::{CourseRequest, CourseResponse};
use crate::mapper::Mapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct CourseMapper;

impl Mapper for CourseMapper {
    type Record = Course;
    type Request = CourseRequest;
    type Response = CourseResponse;

    fn to_record(&self, request: CourseRequest) -> Course {
        Course {
            id: None,
            course_name: request.course_name.unwrap_or_default(),
            description: request.description,
        }
    }

    fn to_response(&self, record: Course) -> CourseResponse {
        CourseResponse {
            id: record.id.unwrap_or_default(),
            course_name: record.course_name,
            description: record.description,
        }
    }

    fn update_from_request(&self, request: CourseRequest, record: &mut Course) {
        record.course_name = request.course_name.unwrap_or_default();
        record.description = request.description;
    }
}
