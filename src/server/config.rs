use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

/// File-backed SQLite store used when `DATABASE_URL` is not set.
const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// Address the HTTP listener binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidEnvVar {
                name: "HOST".to_string(),
                value: self.host.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
