use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-resolve.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-resolve/config.toml";

/// Main configuration structure for Ferrous Resolve
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Iterative resolution configuration
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-resolve.toml in current directory
    /// 3. /etc/ferrous-resolve/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(servers) = overrides.root_servers {
            self.resolver.root_servers = servers;
        }
        if let Some(port) = overrides.port {
            self.resolver.port = port;
        }
        if let Some(timeout) = overrides.query_timeout {
            self.resolver.query_timeout = timeout;
        }
        if let Some(hops) = overrides.max_hops {
            self.resolver.max_hops = hops;
        }
        if let Some(depth) = overrides.max_nesting_depth {
            self.resolver.max_nesting_depth = depth;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.root_servers.is_empty() {
            return Err(ConfigError::Validation(
                "No root servers configured".to_string(),
            ));
        }

        for server in &self.resolver.root_servers {
            if server.trim().parse::<Ipv4Addr>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "Root server '{}' is not an IPv4 literal",
                    server
                )));
            }
        }

        if self.resolver.port == 0 {
            return Err(ConfigError::Validation(
                "Nameserver port cannot be 0".to_string(),
            ));
        }

        if self.resolver.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be greater than 0".to_string(),
            ));
        }

        if self.resolver.max_hops == 0 {
            return Err(ConfigError::Validation(
                "max_hops must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub root_servers: Option<Vec<String>>,
    pub port: Option<u16>,
    pub query_timeout: Option<u64>,
    pub max_hops: Option<u8>,
    pub max_nesting_depth: Option<u8>,
    pub log_level: Option<String>,
}
