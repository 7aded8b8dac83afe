use crate::domain::types::Autotester;
use crate::dto::autotester::{AutotesterRequest, AutotesterResponse};
use crate::mapper::Mapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct AutotesterMapper;

impl Mapper for AutotesterMapper {
    type Record = Autotester;
    type Request = AutotesterRequest;
    type Response = AutotesterResponse;

    fn to_record(&self, request: AutotesterRequest) -> Autotester {
        let mut record = Autotester {
            id: None,
            name: String::new(),
            student_gitlab_url: String::new(),
            tests_gitlab_url: String::new(),
            student_code_path: String::new(),
            test_code_path: String::new(),
            docker_image_url: String::new(),
            gitlab_token: None,
        };
        self.update_from_request(request, &mut record);
        record
    }

    fn to_response(&self, record: Autotester) -> AutotesterResponse {
        AutotesterResponse {
            id: record.id.unwrap_or_default(),
            name: record.name,
            student_gitlab_url: record.student_gitlab_url,
            tests_gitlab_url: record.tests_gitlab_url,
            student_code_path: record.student_code_path,
            test_code_path: record.test_code_path,
            docker_image_url: record.docker_image_url,
            has_gitlab_token: record.gitlab_token.is_some_and(|t| !t.is_empty()),
        }
    }

    fn update_from_request(&self, request: AutotesterRequest, record: &mut Autotester) {
        record.name = request.name.unwrap_or_default();
        record.student_gitlab_url = request.student_gitlab_url.unwrap_or_default();
        record.tests_gitlab_url = request.tests_gitlab_url.unwrap_or_default();
        record.student_code_path = request.student_code_path.unwrap_or_default();
        record.test_code_path = request.test_code_path.unwrap_or_default();
        record.docker_image_url = request.docker_image_url.unwrap_or_default();
        record.gitlab_token = request.gitlab_token;
    }
}
