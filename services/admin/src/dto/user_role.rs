use serde::{Deserialize, Serialize};

use testify_domain::validation::{Constraint, Field, FieldValue, Validate};

use super::{length, not_empty, not_null};

const USER_ROLE_NAME: &[Constraint] = &[
    not_null("User role must not be null"),
    not_empty("User role must not be empty"),
    length(1, 50, "User role name size must be between 1 and 50"),
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleRequest {
    pub user_role_name: Option<String>,
}

impl Validate for UserRoleRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new(
            "userRoleName",
            FieldValue::text(&self.user_role_name),
            USER_ROLE_NAME,
        )]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleResponse {
    pub id: i32,
    pub user_role_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(name: Option<&str>) -> Vec<&'static str> {
        let request = UserRoleRequest {
            user_role_name: name.map(str::to_owned),
        };
        match request.validate() {
            Ok(()) => vec![],
            Err(v) => v.into_iter().map(|v| v.message).collect(),
        }
    }

    #[test]
    fn should_accept_name_within_bounds() {
        assert!(messages(Some("Teacher")).is_empty());
        assert!(messages(Some(&"x".repeat(50))).is_empty());
    }

    #[test]
    fn should_report_null_and_empty_for_missing_name() {
        assert_eq!(
            messages(None),
            vec!["User role must not be null", "User role must not be empty"]
        );
    }

    #[test]
    fn should_report_two_violations_for_empty_name() {
        assert_eq!(
            messages(Some("")),
            vec![
                "User role must not be empty",
                "User role name size must be between 1 and 50"
            ]
        );
    }

    #[test]
    fn should_report_size_for_51_characters() {
        let errors = messages(Some(&"x".repeat(51)));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("size must be between"));
    }
}
