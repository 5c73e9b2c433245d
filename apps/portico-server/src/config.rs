//! Server configuration loaded from the environment

use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Which `ItemRepository` implementation backs the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Memory,
    Sqlite,
}

impl FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "sqlite" => Ok(Self::Sqlite),
            other => bail!("unsupported backend `{other}`; expected memory|sqlite"),
        }
    }
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unsupported log format `{other}`; expected text|json"),
        }
    }
}

/// Everything the server needs to start
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub backend: BackendKind,
    pub database_url: String,
    pub http_addr: SocketAddr,
    pub grpc_addr: SocketAddr,
    pub max_text_len: usize,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup
    ///
    /// Unset keys fall back to their defaults; set but malformed keys are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            backend: parse_or(&lookup, "PORTICO_BACKEND", BackendKind::Memory)?,
            database_url: lookup("PORTICO_DATABASE_URL")
                .unwrap_or_else(|| "sqlite::memory:".to_string()),
            http_addr: parse_or(&lookup, "PORTICO_HTTP_ADDR", ([0, 0, 0, 0], 3000).into())?,
            grpc_addr: parse_or(&lookup, "PORTICO_GRPC_ADDR", ([0, 0, 0, 0], 50051).into())?,
            max_text_len: parse_or(&lookup, "PORTICO_MAX_TEXT_LEN", 4096)?,
            log_format: parse_or(&lookup, "PORTICO_LOG_FORMAT", LogFormat::Text)?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|err: T::Err| anyhow::anyhow!("{err}"))
            .with_context(|| format!("invalid value `{raw}` for {key}")),
        None => Ok(default),
    }
}
