//! Server configuration from environment variables.
//!
//! - `PORT`: listen port (default 3000)
//! - `BIND_ADDR`: listen address (default 0.0.0.0)
//! - `STATIC_DIR`: stylesheet directory served under /static (default `static`)
//! - `GUIDE_CONTENT`: optional JSON file replacing the bundled guide

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub content_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            content_path: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                defaults.port
            }),
            None => defaults.port,
        };

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid BIND_ADDR '{}', using {}", raw, defaults.bind_addr);
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let static_dir = lookup("STATIC_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let content_path = lookup("GUIDE_CONTENT")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Self { bind_addr, port, static_dir, content_path }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
