use crate::{BackendConfig, DashboardDefaults, SessionConfig};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub session: SessionConfig,
    pub dashboard: DashboardDefaults,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

pub fn load(path: &str) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse(&contents).unwrap_or_else(|e| {
            tracing::warn!("failed to parse config {path}: {e}, using defaults");
            Config::default()
        }),
        Err(e) => {
            tracing::warn!("failed to read config {path}: {e}, using defaults");
            Config::default()
        }
    }
}

pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let config = parse(
            r#"
            [backend]
            host_url = "https://api.connextar.com"

            [session]
            secure_cookie = false
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.host_url, "https://api.connextar.com");
        assert_eq!(config.backend.cx_users_path, "/cx-redbooth/connextar-users");
        assert!(!config.session.secure_cookie);
        assert_eq!(config.session.ttl_secs, 604800);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.dashboard.redbooth_hours, Some(35.0));
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.backend.timeout_secs, 10);
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(parse("[server]\nport = \"eighty\"").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load("does/not/exist.toml");
        assert_eq!(config.server.port, 3000);
        assert!(config.session.secure_cookie);
    }
}
