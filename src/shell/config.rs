use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::lookup_host;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("HTTP_PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    #[error("invalid bind address {0:?}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub app_name: String,
    pub api_version: String,
    pub http_host: String,
    pub http_port: u16,
    pub allowed_origins: Vec<String>,
    pub graphiql: bool,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Attendance Service".into(),
            api_version: "v1".into(),
            http_host: "0.0.0.0".into(),
            http_port: 8080,
            allowed_origins: vec![
                "http://localhost:3000".into(),
                "http://localhost:8000".into(),
            ],
            graphiql: true,
            log_filter: "info".into(),
        }
    }
}

impl AppConfig {
    /// Load from the process environment, after an optional `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_provider(|name| std::env::var(name).ok())
    }

    pub fn from_provider<F>(provider: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |name: &str| {
            provider(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let http_port = match read("HTTP_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.http_port,
        };

        let allowed_origins = match read("ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.allowed_origins,
        };

        let graphiql = read("GRAPHIQL")
            .map(|raw| {
                matches!(
                    raw.to_ascii_lowercase().as_str(),
                    "1" | "true" | "yes" | "on"
                )
            })
            .unwrap_or(defaults.graphiql);

        Ok(Self {
            app_name: read("APP_NAME").unwrap_or(defaults.app_name),
            api_version: read("API_VERSION").unwrap_or(defaults.api_version),
            http_host: read("HTTP_HOST").unwrap_or(defaults.http_host),
            http_port,
            allowed_origins,
            graphiql,
            log_filter: read("LOG_FILTER").unwrap_or(defaults.log_filter),
        })
    }

    /// Socket address to listen on. Host names are resolved, first answer wins.
    pub async fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.http_host, self.http_port);
        lookup_host(raw.as_str())
            .await
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or(ConfigError::InvalidAddress(raw))
    }

    pub fn api_prefix(&self) -> String {
        format!("/api/{}", self.api_version)
    }
}
