use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use leptos::prelude::LeptosOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "SITE_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "/etc/site-server/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid listen address: {0}")]
    InvalidAddress(String),
    #[error("invalid port: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding compiled assets (`pkg/`, favicon, ...).
    #[serde(default = "default_site_root")]
    pub site_root: String,
    /// Base name of the generated stylesheet under `pkg/`.
    #[serde(default = "default_output_name")]
    pub output_name: String,
    /// Used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

fn default_site_root() -> String {
    "target/site".into()
}

fn default_output_name() -> String {
    "site".into()
}

fn default_log_filter() -> String {
    "info,site_server=debug".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
            site_root: default_site_root(),
            output_name: default_output_name(),
            log_filter: default_log_filter(),
        }
    }
}

impl ServerConfig {
    /// Config path: first CLI argument, then `SITE_CONFIG_PATH`, then the default.
    pub fn path_from_env() -> PathBuf {
        std::env::args()
            .nth(1)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `SITE_LISTEN_ADDR` / `SITE_PORT` overrides from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("SITE_LISTEN_ADDR") {
            self.listen_addr = addr;
        }
        if let Some(port) = lookup("SITE_PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .listen_addr
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(self.listen_addr.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn leptos_options(&self) -> LeptosOptions {
        let site_addr = self
            .socket_addr()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], self.port)));
        LeptosOptions::builder()
            .output_name(self.output_name.as_str())
            .site_root(self.site_root.as_str())
            .site_addr(site_addr)
            .build()
    }
}
