use crate::domain::types::GradingElement;
use crate::dto::grading_element::{GradingElementRequest, GradingElementResponse};
use crate::mapper::Mapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct GradingElementMapper;

impl Mapper for GradingElementMapper {
    type Record = GradingElement;
    type Request = GradingElementRequest;
    type Response = GradingElementResponse;

    fn to_record(&self, request: GradingElementRequest) -> GradingElement {
        GradingElement {
            id: None,
            assignment_id: request.assignment_id.unwrap_or_default(),
            element_name: request.element_name.unwrap_or_default(),
            description: request.description,
            max_points: request.max_points.unwrap_or_default(),
            is_deduction: request.is_deduction.unwrap_or(false),
        }
    }

    fn to_response(&self, record: GradingElement) -> GradingElementResponse {
        GradingElementResponse {
            id: record.id.unwrap_or_default(),
            assignment_id: record.assignment_id,
            element_name: record.element_name,
            description: record.description,
            max_points: record.max_points,
            is_deduction: record.is_deduction,
        }
    }

    fn update_from_request(&self, request: GradingElementRequest, record: &mut GradingElement) {
        record.assignment_id = request.assignment_id.unwrap_or_default();
        record.element_name = request.element_name.unwrap_or_default();
        record.description = request.description;
        record.max_points = request.max_points.unwrap_or_default();
        record.is_deduction = request.is_deduction.unwrap_or(false);
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn should_default_to_non_deduction() {
        let record = GradingElementMapper.to_record(GradingElementRequest {
            assignment_id: Some(3),
            element_name: Some("Style".into()),
            description: None,
            max_points: Some(Decimal::new(250, 2)),
            is_deduction: None,
        });
        assert!(!record.is_deduction);
        assert_eq!(record.max_points, Decimal::new(25, 1));
    }
}
