use crate::domain::types::Assignment;
use crate::dto::assignment::{AssignmentRequest, AssignmentResponse};
use crate::mapper::Mapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentMapper;

impl Mapper for AssignmentMapper {
    type Record = Assignment;
    type Request = AssignmentRequest;
    type Response = AssignmentResponse;

    fn to_record(&self, request: AssignmentRequest) -> Assignment {
        Assignment {
            id: None,
            course_id: request.course_id.unwrap_or_default(),
            assignment_name: request.assignment_name.unwrap_or_default(),
            description: request.description,
            due_date: request.due_date,
            autotester_id: request.autotester_id,
        }
    }

    fn to_response(&self, record: Assignment) -> AssignmentResponse {
        AssignmentResponse {
            id: record.id.unwrap_or_default(),
            course_id: record.course_id,
            assignment_name: record.assignment_name,
            description: record.description,
            due_date: record.due_date,
            autotester_id: record.autotester_id,
        }
    }

    fn update_from_request(&self, request: AssignmentRequest, record: &mut Assignment) {
        record.course_id = request.course_id.unwrap_or_default();
        record.assignment_name = request.assignment_name.unwrap_or_default();
        record.description = request.description;
        record.due_date = request.due_date;
        record.autotester_id = request.autotester_id;
    }
}
