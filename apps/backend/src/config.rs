//! Server configuration from environment variables.

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_PATH: &str = "data/quickcache.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Snapshot file; `None` keeps everything in memory.
    pub data_path: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Env vars:
    /// - HOST: bind host (default 0.0.0.0)
    /// - PORT: bind port (default 3000)
    /// - QUICKCACHE_DATA_PATH: snapshot file, empty to disable persistence
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let data_path = match lookup("QUICKCACHE_DATA_PATH") {
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(PathBuf::from(raw)),
            None => Some(PathBuf::from(DEFAULT_DATA_PATH)),
        };

        Ok(Self {
            host,
            port,
            data_path,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.data_path, Some(PathBuf::from("data/quickcache.json")));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("QUICKCACHE_DATA_PATH", "/tmp/cards.json"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.data_path, Some(PathBuf::from("/tmp/cards.json")));
    }

    #[test]
    fn test_empty_data_path_disables_persistence() {
        let config = Config::from_lookup(lookup(&[("QUICKCACHE_DATA_PATH", "")])).unwrap();
        assert_eq!(config.data_path, None);
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "abc")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("abc".to_string()));
    }
}
