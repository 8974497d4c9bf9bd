use anyhow::Result;
use url::Url;

/// The console is the client for The Admins unit backend.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The path to the config file
    pub config_file: Option<String>,

    /// Name of this instance
    pub name: String,

    /// The logging config
    pub logging: LoggingConfig,

    /// Backend config
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// The log level to use, this is a tracing env filter
    pub level: String,

    /// If we should log in JSON format
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the backend API. Must end with a trailing slash so
    /// endpoint paths join underneath it.
    pub base_url: Url,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/".parse().expect("failed to parse base url"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: Some("config".to_string()),
            name: "admins-console".to_string(),
            logging: LoggingConfig::default(),
            backend: BackendConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parses the config by layering `ADMINS_`-prefixed environment
    /// variables over an optional config file over the defaults.
    pub fn parse() -> Result<Self> {
        let config_file = std::env::var("ADMINS_CONFIG_FILE").ok().or(Self::default().config_file);

        let mut builder = config::Config::builder();

        if let Some(file) = &config_file {
            builder = builder.add_source(config::File::with_name(file).required(false));
        }

        let mut parsed: Self = builder
            .add_source(config::Environment::with_prefix("ADMINS").separator("__"))
            .build()?
            .try_deserialize()?;

        parsed.config_file = config_file;

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = AppConfig::default();
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert_eq!(config.backend.base_url.as_str(), "http://localhost:8000/api/");
    }

    #[test]
    fn base_url_keeps_its_trailing_slash() {
        let config = BackendConfig::default();
        assert!(config.base_url.as_str().ends_with('/'));
        let joined = config.base_url.join("auth/login").unwrap();
        assert_eq!(joined.as_str(), "http://localhost:8000/api/auth/login");
    }
}
