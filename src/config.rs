//! Server configuration module
//! Reads bind parameters and endpoint templates from the environment

use crate::constants::{
    DEFAULT_API_PORT, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_DIR, DEFAULT_WS_PATH,
    DEFAULT_WS_PORT,
};
use crate::endpoints::EndpointResolver;
use crate::error::{PubsubWebError, Result};
use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// Server configuration parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served for every path that is not a generated route
    pub static_dir: PathBuf,
    /// Port of the connect node advertised in `WS_URL`
    pub ws_port: u16,
    /// Path of the connect node advertised in `WS_URL`
    pub ws_path: String,
    /// Port advertised in `API_URL`
    pub api_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            ws_port: DEFAULT_WS_PORT,
            ws_path: DEFAULT_WS_PATH.to_string(),
            api_port: DEFAULT_API_PORT,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset and empty variables fall back to their defaults; a variable that
    /// is set but cannot be parsed is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = lookup("WEB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_var(&lookup, "WEB_PORT", DEFAULT_PORT)?;
        let static_dir = lookup("WEB_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let ws_port = parse_var(&lookup, "WEB_WS_PORT", DEFAULT_WS_PORT)?;
        let ws_path = lookup("WEB_WS_PATH").unwrap_or_else(|| DEFAULT_WS_PATH.to_string());
        let api_port = parse_var(&lookup, "WEB_API_PORT", DEFAULT_API_PORT)?;

        if ws_port == 0 {
            return Err(PubsubWebError::ConfigError(
                "WEB_WS_PORT must not be 0".to_string(),
            ));
        }
        if api_port == 0 {
            return Err(PubsubWebError::ConfigError(
                "WEB_API_PORT must not be 0".to_string(),
            ));
        }

        Ok(Self {
            host: host.trim().to_string(),
            port,
            static_dir,
            ws_port,
            ws_path: ws_path.trim().to_string(),
            api_port,
        })
    }

    /// Socket address the server binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                PubsubWebError::AddressError(format!("{}:{} ({})", self.host, self.port, e))
            })
    }

    /// Ensure the static directory exists before serving from it
    pub fn validate_static_dir(&self) -> Result<()> {
        if !self.static_dir.is_dir() {
            return Err(PubsubWebError::StaticDirError(format!(
                "{} does not exist or is not a directory",
                self.static_dir.display()
            )));
        }
        Ok(())
    }

    /// Resolver built from the advertised endpoint templates
    pub fn resolver(&self) -> EndpointResolver {
        EndpointResolver::new(self.ws_port, self.ws_path.clone(), self.api_port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e| {
            PubsubWebError::ConfigError(format!("{} has invalid value '{}': {}", key, raw, e))
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 8086);
        assert_eq!(config.ws_port, 8083);
        assert_eq!(config.ws_path, "/connect");
        assert_eq!(config.api_port, 8086);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("WEB_HOST", "127.0.0.1"),
            ("WEB_PORT", "9090"),
            ("WEB_STATIC_DIR", "/srv/www"),
            ("WEB_WS_PORT", "9083"),
            ("WEB_WS_PATH", "/ws"),
            ("WEB_API_PORT", "9090"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));

        let endpoints = config.resolver().resolve("example.com");
        assert_eq!(endpoints.ws_url, "ws://example.com:9083/ws");
        assert_eq!(endpoints.api_url, "http://example.com:9090");
    }

    #[test]
    fn test_ws_path_gets_leading_slash() {
        let config = ServerConfig::from_lookup(lookup_from(&[("WEB_WS_PATH", "ws")])).unwrap();
        assert_eq!(config.ws_path, "ws");

        let resolver = config.resolver();
        assert_eq!(resolver.ws_path(), "/ws");
        assert_eq!(
            resolver.resolve("example.com").ws_url,
            "ws://example.com:8083/ws"
        );
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("WEB_PORT", ""), ("WEB_HOST", "  ")]))
                .unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = ServerConfig::from_lookup(lookup_from(&[("WEB_PORT", "abc")]));
        let err = result.unwrap_err();
        assert!(matches!(err, PubsubWebError::ConfigError(_)));
        assert!(err.to_string().contains("WEB_PORT"));

        assert!(ServerConfig::from_lookup(lookup_from(&[("WEB_WS_PORT", "70000")])).is_err());
        assert!(ServerConfig::from_lookup(lookup_from(&[("WEB_API_PORT", "0")])).is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap().port(), 8086);

        let bad = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            bad.socket_addr(),
            Err(PubsubWebError::AddressError(_))
        ));
    }

    #[test]
    fn test_missing_static_dir() {
        let config = ServerConfig {
            static_dir: PathBuf::from("/definitely/not/a/real/dir"),
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.validate_static_dir(),
            Err(PubsubWebError::StaticDirError(_))
        ));
        assert!(ServerConfig::default().validate_static_dir().is_ok());
    }
}
