use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

const DEFAULT_STORE_FILE: &str = "items.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub store_path: PathBuf,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let store_path = match env::var("ITEMS_FILE") {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            Ok(_) => anyhow::bail!("ITEMS_FILE must not be empty"),
            Err(_) => default_store_path(),
        };

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            store_path,
            service_port,
            service_host,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Store file: {}", self.store_path.display());
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}

/// `items.json` in the directory holding the service binary.
fn default_store_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_STORE_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
}
