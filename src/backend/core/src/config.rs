//! Configuration management.

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VantageError};
use crate::overview::{Environment, ServiceDefinition, DEFAULT_FETCH_TIMEOUT};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// The service × environment grid to poll
    #[serde(default)]
    pub overview: OverviewConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default = "default_json_logging")]
    pub json_logging: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logging: default_json_logging(),
        }
    }
}

/// The polled grid: deployment targets, services, and how their info
/// endpoints are assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewConfig {
    /// Deployment targets, in column order
    #[serde(default)]
    pub environments: Vec<Environment>,

    /// Polled services, in row order
    #[serde(default)]
    pub web_services: Vec<ServiceDefinition>,

    /// Inserted between an environment's base URL and a service's path
    /// selector
    #[serde(default = "default_mid_fix")]
    pub mid_fix: String,

    /// Appended after the path selector
    #[serde(default = "default_post_fix")]
    pub post_fix: String,

    /// Per-request deadline for info-endpoint fetches
    #[serde(with = "humantime_serde", default = "default_fetch_timeout")]
    pub fetch_timeout: Duration,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            environments: Vec::new(),
            web_services: Vec::new(),
            mid_fix: default_mid_fix(),
            post_fix: default_post_fix(),
            fetch_timeout: default_fetch_timeout(),
        }
    }
}

impl OverviewConfig {
    /// Structural validation; failures here are fatal at startup.
    ///
    /// Empty environment or service lists are valid (the grid is simply
    /// empty). Blank or duplicate names are not, since names are the
    /// identity of rows and columns.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for environment in &self.environments {
            if environment.name.trim().is_empty() {
                return Err(VantageError::InvalidConfig(
                    "environment with empty name".to_string(),
                ));
            }
            if !seen.insert(environment.name.as_str()) {
                return Err(VantageError::InvalidConfig(format!(
                    "duplicate environment name: {}",
                    environment.name
                )));
            }
        }

        let mut seen = HashSet::new();
        for service in &self.web_services {
            if service.name.trim().is_empty() {
                return Err(VantageError::InvalidConfig(
                    "web service with empty name".to_string(),
                ));
            }
            if !seen.insert(service.name.as_str()) {
                return Err(VantageError::InvalidConfig(format!(
                    "duplicate web service name: {}",
                    service.name
                )));
            }
        }

        Ok(())
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_json_logging() -> bool {
    true
}
fn default_mid_fix() -> String {
    "/".to_string()
}
fn default_post_fix() -> String {
    "/actuator/info".to_string()
}
fn default_fetch_timeout() -> Duration {
    DEFAULT_FETCH_TIMEOUT
}

impl Config {
    /// Load configuration from the environment and an optional config file.
    ///
    /// The file named by `VANTAGE_CONFIG` is read when present; `VANTAGE_`
    /// prefixed environment variables (e.g. `VANTAGE_SERVER__PORT`) override
    /// individual values.
    pub fn load() -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Ok(path) = std::env::var("VANTAGE_CONFIG") {
            builder = builder.add_source(config::File::with_name(&path));
        }
        let config = builder
            .add_source(config::Environment::with_prefix("VANTAGE").separator("__"))
            .build()?;

        let cfg: Config = config.try_deserialize()?;
        Ok(cfg)
    }

    /// Load from a specific file path.
    pub fn from_file(path: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("VANTAGE").separator("__"))
            .build()?;

        let cfg: Config = config.try_deserialize()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn environment(name: &str) -> Environment {
        Environment {
            name: name.to_string(),
            base_url: format!("http://{name}"),
        }
    }

    fn web_service(name: &str) -> ServiceDefinition {
        ServiceDefinition {
            name: name.to_string(),
            path_selector: name.to_string(),
        }
    }

    #[test]
    fn defaults_apply_to_missing_fields() {
        let config: OverviewConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.mid_fix, "/");
        assert_eq!(config.post_fix, "/actuator/info");
        assert_eq!(config.fetch_timeout, Duration::from_secs(2));
        assert!(config.environments.is_empty());
        assert!(config.web_services.is_empty());
    }

    #[test]
    fn fetch_timeout_accepts_humantime_strings() {
        let config: OverviewConfig = serde_json::from_str(r#"{"fetch_timeout": "500ms"}"#).unwrap();
        assert_eq!(config.fetch_timeout, Duration::from_millis(500));
    }

    #[test]
    fn empty_lists_are_valid() {
        assert!(OverviewConfig::default().validate().is_ok());
    }

    #[test]
    fn duplicate_environment_names_are_rejected() {
        let config = OverviewConfig {
            environments: vec![environment("dev"), environment("dev")],
            ..OverviewConfig::default()
        };
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("duplicate environment name"));
    }

    #[test]
    fn duplicate_web_service_names_are_rejected() {
        let config = OverviewConfig {
            web_services: vec![web_service("billing"), web_service("billing")],
            ..OverviewConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_names_are_rejected() {
        let config = OverviewConfig {
            environments: vec![environment(" ")],
            ..OverviewConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn environment_variables_override_file_values() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[overview]\npost_fix = \"/info\"").unwrap();
        file.flush().unwrap();

        std::env::set_var("VANTAGE_OVERVIEW__POST_FIX", "/status");
        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        std::env::remove_var("VANTAGE_OVERVIEW__POST_FIX");

        assert_eq!(config.overview.post_fix, "/status");
    }

    #[test]
    fn loads_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[overview]
mid_fix = "/backend/"
fetch_timeout = "1s"

[[overview.environments]]
name = "staging"
base_url = "http://staging.example"

[[overview.web_services]]
name = "billing"
path_selector = "billing"
"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.overview.environments.len(), 1);
        assert_eq!(config.overview.web_services[0].name, "billing");
        assert_eq!(config.overview.mid_fix, "/backend/");
        assert_eq!(config.overview.fetch_timeout, Duration::from_secs(1));
        assert_eq!(config.server.port, 8080);
    }
}
