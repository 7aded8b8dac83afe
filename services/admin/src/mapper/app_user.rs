use crate::domain::types::AppUser;
use crate::dto::app_user::{AppUserRequest, AppUserResponse};
use crate::mapper::Mapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct AppUserMapper;

impl Mapper for AppUserMapper {
    type Record = AppUser;
    type Request = AppUserRequest;
    type Response = AppUserResponse;

    fn to_record(&self, request: AppUserRequest) -> AppUser {
        let mut record = AppUser {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            user_role_id: 0,
        };
        self.update_from_request(request, &mut record);
        record
    }

    fn to_response(&self, record: AppUser) -> AppUserResponse {
        AppUserResponse {
            id: record.id.unwrap_or_default(),
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            user_role_id: record.user_role_id,
        }
    }

    fn update_from_request(&self, request: AppUserRequest, record: &mut AppUser) {
        record.first_name = request.first_name.unwrap_or_default();
        record.last_name = request.last_name.unwrap_or_default();
        record.email = request.email.unwrap_or_default();
        record.user_role_id = request.user_role_id.unwrap_or_default();
    }
}
