use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::errors::ConfigError;
use super::locator::LocatorConfig;
use super::logging::LoggingConfig;
use super::refresh::RefreshConfig;
use super::resolver::{ResolverConfig, ResolverProtocol};

const LOCAL_CONFIG_PATH: &str = "ferrous-locator.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-locator/config.toml";

/// Main configuration structure for Ferrous Locator
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Which name to look up
    #[serde(default)]
    pub locator: LocatorConfig,

    /// Nameserver used for TXT lookups
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Background refresh of the endpoint cache
    #[serde(default)]
    pub refresh: RefreshConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-locator.toml in current directory
    /// 3. /etc/ferrous-locator/config.toml
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

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(fqdn) = overrides.fqdn {
            self.locator.fqdn = Some(fqdn);
        }
        if let Some(nameserver) = overrides.nameserver {
            self.resolver.nameserver = nameserver;
        }
        if overrides.force_tcp {
            self.resolver.protocol = ResolverProtocol::Tcp;
        }
        if overrides.watch {
            self.refresh.enabled = true;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout cannot be 0".to_string(),
            ));
        }

        if self.refresh.min_interval_secs == 0 || self.refresh.retry_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Refresh intervals cannot be 0".to_string(),
            ));
        }

        if let Some(fqdn) = &self.locator.fqdn {
            if fqdn.trim().is_empty() {
                return Err(ConfigError::Validation("FQDN cannot be empty".to_string()));
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub fqdn: Option<String>,
    pub nameserver: Option<SocketAddr>,
    pub force_tcp: bool,
    pub watch: bool,
    pub log_level: Option<String>,
}
