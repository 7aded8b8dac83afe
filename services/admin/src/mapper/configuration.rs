use crate::domain::types::Configuration;
use crate::dto::configuration::{ConfigurationRequest, ConfigurationResponse};
use crate::mapper::Mapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigurationMapper;

impl Mapper for ConfigurationMapper {
    type Record = Configuration;
    type Request = ConfigurationRequest;
    type Response = ConfigurationResponse;

    fn to_record(&self, request: ConfigurationRequest) -> Configuration {
        Configuration {
            id: None,
            config_key: request.config_key.unwrap_or_default(),
            config_value: request.config_value,
        }
    }

    fn to_response(&self, record: Configuration) -> ConfigurationResponse {
        ConfigurationResponse {
            id: record.id.unwrap_or_default(),
            config_key: record.config_key,
            config_value: record.config_value,
        }
    }

    fn update_from_request(&self, request: ConfigurationRequest, record: &mut Configuration) {
        record.config_key = request.config_key.unwrap_or_default();
        record.config_value = request.config_value;
    }
}
