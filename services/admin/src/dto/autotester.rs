use serde::{Deserialize, Serialize};

use testify_domain::validation::{Constraint, Field, FieldValue, Validate};

use super::{length, not_empty, not_null};

const NAME: &[Constraint] = &[
    not_null("Autotester name must not be null"),
    not_empty("Autotester name must not be empty"),
    length(1, 255, "Autotester name size must be between 1 and 255"),
];

const STUDENT_GITLAB_URL: &[Constraint] = &[
    not_null("Student GitLab URL must not be null"),
    not_empty("Student GitLab URL must not be empty"),
    Constraint::Url {
        message: "Student GitLab URL must be a valid URL",
    },
];

const TESTS_GITLAB_URL: &[Constraint] = &[
    not_null("Tests GitLab URL must not be null"),
    not_empty("Tests GitLab URL must not be empty"),
    Constraint::Url {
        message: "Tests GitLab URL must be a valid URL",
    },
];

const STUDENT_CODE_PATH: &[Constraint] = &[
    not_null("Student code path must not be null"),
    not_empty("Student code path must not be empty"),
];

const TEST_CODE_PATH: &[Constraint] = &[
    not_null("Test code path must not be null"),
    not_empty("Test code path must not be empty"),
];

const DOCKER_IMAGE_URL: &[Constraint] = &[
    not_null("Docker image URL must not be null"),
    not_empty("Docker image URL must not be empty"),
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutotesterRequest {
    pub name: Option<String>,
    pub student_gitlab_url: Option<String>,
    pub tests_gitlab_url: Option<String>,
    pub student_code_path: Option<String>,
    pub test_code_path: Option<String>,
    pub docker_image_url: Option<String>,
    pub gitlab_token: Option<String>,
}

impl Validate for AutotesterRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("name", FieldValue::text(&self.name), NAME),
            Field::new(
                "studentGitlabUrl",
                FieldValue::text(&self.student_gitlab_url),
                STUDENT_GITLAB_URL,
            ),
            Field::new(
                "testsGitlabUrl",
                FieldValue::text(&self.tests_gitlab_url),
                TESTS_GITLAB_URL,
            ),
            Field::new(
                "studentCodePath",
                FieldValue::text(&self.student_code_path),
                STUDENT_CODE_PATH,
            ),
            Field::new(
                "testCodePath",
                FieldValue::text(&self.test_code_path),
                TEST_CODE_PATH,
            ),
            Field::new(
                "dockerImageUrl",
                FieldValue::text(&self.docker_image_url),
                DOCKER_IMAGE_URL,
            ),
        ]
    }
}

/// Autotester as returned to clients. The GitLab token itself is never echoed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutotesterResponse {
    pub id: i32,
    pub name: String,
    pub student_gitlab_url: String,
    pub tests_gitlab_url: String,
    pub student_code_path: String,
    pub test_code_path: String,
    pub docker_image_url: String,
    pub has_gitlab_token: bool,
}
