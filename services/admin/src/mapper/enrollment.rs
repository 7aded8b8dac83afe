use crate::domain::types::Enrollment;
use crate::dto::enrollment::{EnrollmentRequest, EnrollmentResponse};
use crate::mapper::Mapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct EnrollmentMapper;

impl Mapper for EnrollmentMapper {
    type Record = Enrollment;
    type Request = EnrollmentRequest;
    type Response = EnrollmentResponse;

    fn to_record(&self, request: EnrollmentRequest) -> Enrollment {
        Enrollment {
            id: None,
            course_id: request.course_id.unwrap_or_default(),
            student_id: request.student_id.unwrap_or_default(),
        }
    }

    fn to_response(&self, record: Enrollment) -> EnrollmentResponse {
        EnrollmentResponse {
            id: record.id.unwrap_or_default(),
            course_id: record.course_id,
            student_id: record.student_id,
        }
    }

    fn update_from_request(&self, request: EnrollmentRequest, record: &mut Enrollment) {
        record.course_id = request.course_id.unwrap_or_default();
        record.student_id = request.student_id.unwrap_or_default();
    }
}
