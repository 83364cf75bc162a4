//! Configuration loading
//!
//! Defaults come from the `[portfolio]` table of `portfolio.toml`; every key
//! can be overridden by the environment variable of the same name in upper
//! case (`port` -> `PORT`). Environment always wins.

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";

/// Environment variable naming an alternate config file
pub const CONFIG_PATH_ENV: &str = "PORTFOLIO_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub app_name: String,
    pub version: String,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    /// Name reported by `/health`
    pub service_name: String,
    /// Directory served under `/static`
    pub static_dir: String,

    // Cloud deployment metadata (reported, never acted on)
    pub gcp_project_id: String,
    pub gcp_region: String,
    pub artifact_registry: String,
    pub docker_image_name: String,
    pub docker_tag: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "Portfolio".to_string(),
            version: "0.1.0".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            debug: false,
            service_name: "portfolio-app".to_string(),
            static_dir: "static".to_string(),
            gcp_project_id: String::new(),
            gcp_region: "us-central1".to_string(),
            artifact_registry: "portfolio-artifact-docker".to_string(),
            docker_image_name: "portfolio-app".to_string(),
            docker_tag: "latest".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    portfolio: Config,
}

impl Config {
    /// Parse the `[portfolio]` table; missing keys keep their defaults
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(toml_str)?;
        Ok(file.portfolio)
    }

    /// Read and parse a config file (no environment overrides)
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Load the config file and apply process environment overrides.
    ///
    /// The file is required: a missing file aborts startup.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let mut config = Self::load_from(Path::new(&path))?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Override fields from `lookup(UPPER_CASE_KEY)`.
    ///
    /// Booleans are true only for "true" (any case); integers use a plain
    /// decimal parse and reject anything else.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let strings: [(&str, &mut String); 10] = [
            ("APP_NAME", &mut self.app_name),
            ("VERSION", &mut self.version),
            ("HOST", &mut self.host),
            ("SERVICE_NAME", &mut self.service_name),
            ("STATIC_DIR", &mut self.static_dir),
            ("GCP_PROJECT_ID", &mut self.gcp_project_id),
            ("GCP_REGION", &mut self.gcp_region),
            ("ARTIFACT_REGISTRY", &mut self.artifact_registry),
            ("DOCKER_IMAGE_NAME", &mut self.docker_image_name),
            ("DOCKER_TAG", &mut self.docker_tag),
        ];
        for (key, field) in strings {
            if let Some(value) = lookup(key) {
                *field = value;
            }
        }

        if let Some(value) = lookup("DEBUG") {
            self.debug = parse_bool(&value);
        }

        if let Some(value) = lookup("PORT") {
            self.port = value
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                    key: "PORT",
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
        }

        Ok(())
    }

    /// Resolve `host:port`. Hostnames such as `localhost` are looked up;
    /// the first resolved address is used.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: "HOST",
            value: format!("{}:{}", self.host, self.port),
            reason,
        };
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("host resolved to no addresses".to_string()))
    }

    /// Default tracing filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "portfolio_site=debug,tower_http=debug,axum=debug,info"
        } else {
            "portfolio_site=info,tower_http=info,warn"
        }
    }
}

fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
