use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

use crate::common::CustomerId;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,marketplace_core=debug";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file of worker documents to seed the roster with
    pub roster_path: Option<PathBuf>,
    /// Customer the intake sessions book on behalf of
    pub customer_id: CustomerId,
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let customer_id = match env::var("CUSTOMER_ID") {
            Ok(raw) => CustomerId::parse(raw.trim())
                .with_context(|| format!("CUSTOMER_ID must be a UUID, got {:?}", raw))?,
            Err(_) => CustomerId::new(),
        };

        Ok(Self {
            roster_path: env::var("ROSTER_PATH").ok().map(PathBuf::from),
            customer_id,
            log_filter: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub fn with_roster_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.roster_path = Some(path.into());
        self
    }

    pub fn with_customer_id(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = customer_id;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: None,
            customer_id: CustomerId::new(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_apply() {
        let customer = CustomerId::new();
        let config = Config::default()
            .with_roster_path("workers.json")
            .with_customer_id(customer);

        assert_eq!(config.roster_path, Some(PathBuf::from("workers.json")));
        assert_eq!(config.customer_id, customer);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
