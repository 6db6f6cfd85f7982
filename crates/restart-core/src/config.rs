//! Configuration types for Restart

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::MIST_PER_SUI;
use crate::{Error, Mist, Network};

/// Environment variable overriding the API port
pub const API_PORT_ENV: &str = "RESTART_API_PORT";

/// Mock wallet session behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Simulated latency of `connect` (milliseconds)
    pub connect_latency_ms: u64,

    /// Simulated latency of `refresh_balance` (milliseconds)
    pub refresh_latency_ms: u64,

    /// Simulated latency of `submit_lock_request` (milliseconds)
    pub submit_latency_ms: u64,

    /// Balance assigned on connect
    pub seed_balance_mist: Mist,

    /// Exclusive upper bound for refreshed balances
    pub max_random_balance_mist: Mist,

    /// Whether `connect` while connected re-randomizes the account
    /// instead of failing with `AlreadyConnected`
    pub allow_reconnect: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            connect_latency_ms: 0,
            refresh_latency_ms: 0,
            submit_latency_ms: 2_000,
            seed_balance_mist: MIST_PER_SUI,
            max_random_balance_mist: 10 * MIST_PER_SUI,
            allow_reconnect: true,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Network shown in the info panel
    #[serde(default)]
    pub network: Network,

    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Mock session settings
    #[serde(default)]
    pub session: SessionConfig,
}

fn default_api_port() -> u16 {
    18_600
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            api_port: default_api_port(),
            session: SessionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional JSON file, then apply
    /// environment overrides. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
                serde_json::from_str(&raw).map_err(|e| Error::Serialization(e.to_string()))?
            }
            Some(path) => {
                tracing::debug!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
            None => Self::default(),
        };

        if let Ok(port) = std::env::var(API_PORT_ENV) {
            config.api_port = port
                .parse()
                .map_err(|_| Error::Config(format!("{} must be a port number", API_PORT_ENV)))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.api_port, 18_600);
        assert_eq!(config.session.submit_latency_ms, 2_000);
        assert_eq!(config.session.seed_balance_mist, 1_000_000_000);
        assert_eq!(config.session.max_random_balance_mist, 10_000_000_000);
        assert!(config.session.allow_reconnect);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: AppConfig =
            serde_json::from_str(r#"{"network":"devnet","session":{"submit_latency_ms":10}}"#)
                .unwrap();
        assert_eq!(parsed.network, Network::Devnet);
        assert_eq!(parsed.api_port, 18_600);
        assert_eq!(parsed.session.submit_latency_ms, 10);
        assert_eq!(parsed.session.seed_balance_mist, MIST_PER_SUI);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/restart.json"))).unwrap();
        assert_eq!(config.network, Network::Testnet);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("restart-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"network":"mainnet"}"#).unwrap();
        let config = AppConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.network, Network::Mainnet);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.api_port, config.api_port);
    }
}
