use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Search engine connection configuration
    pub engine: EngineConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default.toml".to_string());

        config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::with_name(&config_path).required(false))
            // Override with environment variables (prefix: MEDIA_SEARCH)
            .add_source(
                config::Environment::with_prefix("MEDIA_SEARCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server bind host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine host, with or without scheme (scheme defaults to https)
    pub host: String,

    /// Engine port
    #[serde(default = "default_engine_port")]
    pub port: u16,

    /// Basic-auth username
    #[serde(default)]
    pub username: String,

    /// Basic-auth password
    #[serde(default)]
    pub password: String,

    /// Index to search
    pub index: String,

    /// Skip TLS certificate verification (the production engine is
    /// self-signed)
    #[serde(default = "default_true")]
    pub insecure_tls: bool,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl EngineConfig {
    /// Full engine endpoint, `{scheme}://{host}:{port}`
    pub fn endpoint(&self) -> String {
        if self.host.contains("://") {
            format!("{}:{}", self.host, self.port)
        } else {
            format!("https://{}:{}", self.host, self.port)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8080
}

fn default_engine_port() -> u16 {
    9200
}

fn default_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        assert_eq!(default_http_port(), 8080);
        assert_eq!(default_engine_port(), 9200);
        assert_eq!(default_log_level(), "info");
        assert!(default_true());
    }

    #[test]
    fn test_endpoint_adds_https_scheme() {
        let config = EngineConfig {
            host: "engine.example.com".to_string(),
            port: 9200,
            username: String::new(),
            password: String::new(),
            index: "media".to_string(),
            insecure_tls: true,
            timeout_secs: 30,
        };
        assert_eq!(config.endpoint(), "https://engine.example.com:9200");
    }

    #[test]
    fn test_endpoint_keeps_explicit_scheme() {
        let config = EngineConfig {
            host: "http://127.0.0.1".to_string(),
            port: 9200,
            username: String::new(),
            password: String::new(),
            index: "media".to_string(),
            insecure_tls: false,
            timeout_secs: 30,
        };
        assert_eq!(config.endpoint(), "http://127.0.0.1:9200");
    }

    #[test]
    fn test_embedded_defaults_deserialize() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.engine.index, "media");
        assert!(config.engine.insecure_tls);
    }
}
