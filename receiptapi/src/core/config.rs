use std::{
    net::{IpAddr, Ipv4Addr},
    str::FromStr,
};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;

/// Listener configuration for the HTTP server.
///
/// Values are read from the `RECEIPTAPI_HOST` and `RECEIPTAPI_PORT`
/// environment variables. Missing or unparseable values fall back to
/// `0.0.0.0:8080`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: parse_or("RECEIPTAPI_HOST", lookup("RECEIPTAPI_HOST"), defaults.host),
            port: parse_or("RECEIPTAPI_PORT", lookup("RECEIPTAPI_PORT"), defaults.port),
        }
    }

    /// The `host:port` address to bind.
    pub fn addr(&self) -> (IpAddr, u16) {
        (self.host, self.port)
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> T {
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "ignoring unparseable setting, using default");
            default
        }),
    }
}
