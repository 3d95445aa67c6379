//! File-backed configuration for the registry service.
//!
//! `config.toml` is looked up at `CONFIG_PATH` (default `./config.toml`);
//! the database URL may also come from `DATABASE_URL`. SQLite allows a
//! single writer, so the pool knobs are deliberately few.

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 5555, worker_threads: None }
    }
}

impl ServerConfig {
    /// Resolved bind address; a blank host falls back to loopback.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        if self.port == 0 {
            return Err(anyhow!("server.port must be non-zero"));
        }
        let host = if self.host.trim().is_empty() { "127.0.0.1" } else { self.host.trim() };
        format!("{}:{}", host, self.port)
            .parse()
            .context("server.host must be an IP address")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 5,
            acquire_timeout_secs: 30,
            sqlx_logging: false,
        }
    }
}

impl DatabaseConfig {
    /// Fill the URL from `DATABASE_URL` when the TOML leaves it empty.
    pub fn resolve_url(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or via DATABASE_URL"));
        }
        if !self.url.to_lowercase().starts_with("sqlite:") {
            return Err(anyhow!("database.url must start with sqlite:"));
        }
        if self.max_connections == 0 {
            return Err(anyhow!("database.max_connections must be >= 1"));
        }
        if self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database.acquire_timeout_secs must be positive"));
        }
        Ok(())
    }
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.database.resolve_url();
        cfg.database.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_toml_with_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 5555

            [database]
            url = "sqlite://camp.db?mode=rwc"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.bind_addr().unwrap(), "0.0.0.0:5555".parse().unwrap());
        assert_eq!(cfg.server.worker_threads, None);
        assert_eq!(cfg.database.max_connections, 5);
        assert!(cfg.database.validate().is_ok());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.server.bind_addr().unwrap(), "127.0.0.1:5555".parse().unwrap());
        // no URL anywhere is a validation error
        assert!(cfg.database.validate().is_err());
    }

    #[test]
    fn bind_addr_falls_back_on_blank_host() {
        let server = ServerConfig { host: "  ".into(), port: 8080, worker_threads: None };
        assert_eq!(server.bind_addr().unwrap(), "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn bind_addr_rejects_port_zero() {
        let server = ServerConfig { host: "127.0.0.1".into(), port: 0, worker_threads: None };
        assert!(server.bind_addr().is_err());
    }

    #[test]
    fn validate_rejects_non_sqlite_url() {
        let db = DatabaseConfig { url: "postgres://localhost/camp".into(), ..Default::default() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_pool() {
        let db = DatabaseConfig {
            url: "sqlite://camp.db?mode=rwc".into(),
            max_connections: 0,
            ..Default::default()
        };
        assert!(db.validate().is_err());
    }
}
