use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Which store backend serves the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    DynamoDb,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dynamodb" => Ok(StoreBackend::DynamoDb),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow::anyhow!(
                "STORE_BACKEND must be one of: dynamodb, memory, got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    pub dynamodb_endpoint_url: Option<String>,
    pub dynamodb_auto_provision: bool,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// AWS region and credentials are not read here; the SDK picks them up
    /// from its own ambient configuration.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let store_backend = lookup("STORE_BACKEND")
            .unwrap_or_else(|| "dynamodb".to_string())
            .parse::<StoreBackend>()?;

        let dynamodb_endpoint_url = lookup("DYNAMODB_ENDPOINT_URL").filter(|s| !s.is_empty());

        let dynamodb_auto_provision = match lookup("DYNAMODB_AUTO_PROVISION") {
            Some(raw) => parse_bool(&raw)
                .context("DYNAMODB_AUTO_PROVISION must be true or false")?,
            None => dynamodb_endpoint_url.is_some(),
        };

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            store_backend,
            dynamodb_endpoint_url,
            dynamodb_auto_provision,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Store backend: {:?}", self.store_backend);
        if self.store_backend == StoreBackend::DynamoDb {
            tracing::info!(
                "  DynamoDB endpoint: {}",
                self.dynamodb_endpoint_url
                    .as_deref()
                    .unwrap_or("default (regional service)")
            );
            tracing::info!("  DynamoDB auto-provision: {}", self.dynamodb_auto_provision);
        }
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(anyhow::anyhow!("not a boolean: '{}'", other)),
    }
}
