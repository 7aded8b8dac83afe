use serde::{Deserialize, Serialize};

use testify_domain::validation::{Constraint, Field, FieldValue, Validate};

use super::{length, not_empty, not_null};

const FIRST_NAME: &[Constraint] = &[
    not_null("First name must not be null"),
    not_empty("First name must not be empty"),
    length(1, 100, "First name size must be between 1 and 100"),
];

const LAST_NAME: &[Constraint] = &[
    not_null("Last name must not be null"),
    not_empty("Last name must not be empty"),
    length(1, 100, "Last name size must be between 1 and 100"),
];

const EMAIL: &[Constraint] = &[
    not_null("Email must not be null"),
    not_empty("Email must not be empty"),
    length(1, 255, "Email size must be between 1 and 255"),
    Constraint::Email {
        message: "Email must be a well-formed e-mail address",
    },
];

const USER_ROLE_ID: &[Constraint] = &[not_null("User role id must not be null")];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub user_role_id: Option<i32>,
}

impl Validate for AppUserRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("firstName", FieldValue::text(&self.first_name), FIRST_NAME),
            Field::new("lastName", FieldValue::text(&self.last_name), LAST_NAME),
            Field::new("email", FieldValue::text(&self.email), EMAIL),
            Field::new(
                "userRoleId",
                FieldValue::presence(&self.user_role_id),
                USER_ROLE_ID,
            ),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUserResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_role_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AppUserRequest {
        AppUserRequest {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            email: Some("ada@example.com".into()),
            user_role_id: Some(1),
        }
    }

    #[test]
    fn should_accept_complete_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn should_reject_malformed_email() {
        let request = AppUserRequest {
            email: Some("ada.example.com".into()),
            ..request()
        };
        let violations = request.validate().unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "email");
    }

    #[test]
    fn should_require_role() {
        let request = AppUserRequest {
            user_role_id: None,
            ..request()
        };
        let violations = request.validate().unwrap_err();
        assert_eq!(violations[0].message, "User role id must not be null");
    }
}
