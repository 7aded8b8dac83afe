use crate::domain::types::UserRole;
use crate::dto::user_role::{UserRoleRequest, UserRoleResponse};
use crate::mapper::Mapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct UserRoleMapper;

impl Mapper for UserRoleMapper {
    type Record = UserRole;
    type Request = UserRoleRequest;
    type Response = UserRoleResponse;

    fn to_record(&self, request: UserRoleRequest) -> UserRole {
        UserRole {
            id: None,
            name: request.user_role_name.unwrap_or_default(),
        }
    }

    fn to_response(&self, record: UserRole) -> UserRoleResponse {
        UserRoleResponse {
            id: record.id.unwrap_or_default(),
            user_role_name: record.name,
        }
    }

    fn update_from_request(&self, request: UserRoleRequest, record: &mut UserRole) {
        record.name = request.user_role_name.unwrap_or_default();
    }
}
