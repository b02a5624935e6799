//! API Configuration
//!
//! Where the remote timetable service lives. Same shape as the `config.json`
//! shipped with the frontend.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Overrides the configured endpoint on native builds.
pub const API_URL_ENV: &str = "TIMETABLE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub api_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    #[serde(default)]
    pub is_dev: bool,
    pub development: Endpoint,
    pub production: Endpoint,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            is_dev: true,
            development: Endpoint {
                api_url: "http://localhost:8000".to_string(),
            },
            production: Endpoint {
                api_url: "http://localhost:8000".to_string(),
            },
        }
    }
}

impl ApiConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ApiConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.development.api_url.trim().is_empty() {
            return Err(ConfigError::EmptyApiUrl("development"));
        }
        if self.production.api_url.trim().is_empty() {
            return Err(ConfigError::EmptyApiUrl("production"));
        }
        Ok(())
    }

    /// Base URL for the active environment, without a trailing slash.
    pub fn api_url(&self) -> String {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                return url.trim_end_matches('/').to_string();
            }
        }
        let endpoint = if self.is_dev {
            &self.development
        } else {
            &self.production
        };
        endpoint.api_url.trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{
        "isDev": false,
        "development": {"apiUrl": "http://localhost:8000/"},
        "production": {"apiUrl": "https://api.school.test"}
    }"#;

    #[test]
    fn test_selects_endpoint_by_environment() {
        let mut config = ApiConfig::from_json_str(CONFIG).unwrap();
        assert_eq!(config.api_url(), "https://api.school.test");

        config.is_dev = true;
        assert_eq!(config.api_url(), "http://localhost:8000");
    }

    #[test]
    fn test_rejects_empty_url() {
        let json = r#"{"development": {"apiUrl": ""}, "production": {"apiUrl": "x"}}"#;
        assert!(matches!(
            ApiConfig::from_json_str(json),
            Err(ConfigError::EmptyApiUrl("development"))
        ));
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        assert!(matches!(
            ApiConfig::from_json_str("{"),
            Err(ConfigError::Parse(_))
        ));
    }
}
