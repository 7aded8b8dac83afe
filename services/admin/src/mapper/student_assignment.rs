use crate::domain::types::StudentAssignment;
use crate::dto::student_assignment::{StudentAssignmentRequest, StudentAssignmentResponse};
use crate::mapper::Mapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct StudentAssignmentMapper;

impl Mapper for StudentAssignmentMapper {
    type Record = StudentAssignment;
    type Request = StudentAssignmentRequest;
    type Response = StudentAssignmentResponse;

    fn to_record(&self, request: StudentAssignmentRequest) -> StudentAssignment {
        StudentAssignment {
            id: None,
            student_id: request.student_id.unwrap_or_default(),
            assignment_id: request.assignment_id.unwrap_or_default(),
            submission_url: request.submission_url,
            grade: request.grade,
            feedback: request.feedback,
            submission_date: request.submission_date,
        }
    }

    fn to_response(&self, record: StudentAssignment) -> StudentAssignmentResponse {
        StudentAssignmentResponse {
            id: record.id.unwrap_or_default(),
            student_id: record.student_id,
            assignment_id: record.assignment_id,
            submission_url: record.submission_url,
            grade: record.grade,
            feedback: record.feedback,
            submission_date: record.submission_date,
        }
    }

    fn update_from_request(
        &self,
        request: StudentAssignmentRequest,
        record: &mut StudentAssignment,
    ) {
        record.student_id = request.student_id.unwrap_or_default();
        record.assignment_id = request.assignment_id.unwrap_or_default();
        record.submission_url = request.submission_url;
        record.grade = request.grade;
        record.feedback = request.feedback;
        record.submission_date = request.submission_date;
    }
}
