/// Admin service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AdminConfig {
    /// Database connection URL.
    pub database_url: String,
    /// TCP port to listen on (default 8080). Env var: `ADMIN_PORT`.
    pub admin_port: u16,
}

impl AdminConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            admin_port: parse_port(std::env::var("ADMIN_PORT").ok()),
        }
    }
}

fn parse_port(value: Option<String>) -> u16 {
    value.and_then(|v| v.parse().ok()).unwrap_or(8080)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_port_when_unset_or_invalid() {
        assert_eq!(parse_port(None), 8080);
        assert_eq!(parse_port(Some("not-a-port".into())), 8080);
    }

    #[test]
    fn should_parse_explicit_port() {
        assert_eq!(parse_port(Some("9090".into())), 9090);
    }
}
