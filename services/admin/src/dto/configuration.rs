use serde::{Deserialize, Serialize};

use testify_domain::validation::{Constraint, Field, FieldValue, Validate};

use super::{length, not_empty, not_null};

const CONFIG_KEY: &[Constraint] = &[
    not_null("Configuration key must not be null"),
    not_empty("Configuration key must not be empty"),
    length(1, 255, "Configuration key size must be between 1 and 255"),
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRequest {
    pub config_key: Option<String>,
    pub config_value: Option<String>,
}

impl Validate for ConfigurationRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new(
            "configKey",
            FieldValue::text(&self.config_key),
            CONFIG_KEY,
        )]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationResponse {
    pub id: i32,
    pub config_key: String,
    pub config_value: Option<String>,
}
