use crate::domain::types::StudentGradingElement;
use crate::dto::student_grading_element::{
    StudentGradingElementRequest, StudentGradingElementResponse,
};
use crate::mapper::Mapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct StudentGradingElementMapper;

impl Mapper for StudentGradingElementMapper {
    type Record = StudentGradingElement;
    type Request = StudentGradingElementRequest;
    type Response = StudentGradingElementResponse;

    fn to_record(&self, request: StudentGradingElementRequest) -> StudentGradingElement {
        StudentGradingElement {
            id: None,
            student_assignment_id: request.student_assignment_id.unwrap_or_default(),
            grading_element_id: request.grading_element_id.unwrap_or_default(),
            points_awarded: request.points_awarded.unwrap_or_default(),
            feedback: request.feedback,
        }
    }

    fn to_response(&self, record: StudentGradingElement) -> StudentGradingElementResponse {
        StudentGradingElementResponse {
            id: record.id.unwrap_or_default(),
            student_assignment_id: record.student_assignment_id,
            grading_element_id: record.grading_element_id,
            points_awarded: record.points_awarded,
            feedback: record.feedback,
        }
    }

    fn update_from_request(
        &self,
        request: StudentGradingElementRequest,
        record: &mut StudentGradingElement,
    ) {
        record.student_assignment_id = request.student_assignment_id.unwrap_or_default();
        record.grading_element_id = request.grading_element_id.unwrap_or_default();
        record.points_awarded = request.points_awarded.unwrap_or_default();
        record.feedback = request.feedback;
    }
}
