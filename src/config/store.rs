//! Document store configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Document store configuration
///
/// The store is optional: without a URI, submissions are analyzed but not
/// persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Redis connection URI; absent disables persistence
    #[serde(default)]
    pub uri: Option<String>,

    /// Database name (first half of the key namespace)
    #[serde(default = "default_database")]
    pub database: String,

    /// Collection name (second half of the key namespace)
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Connect and ping timeout in milliseconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,
}

impl StoreConfig {
    /// Configured URI, treating a blank value as absent
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    /// Whether a store URI is configured
    pub fn is_configured(&self) -> bool {
        self.uri().is_some()
    }

    /// Key namespace, `{database}:{collection}`
    pub fn namespace(&self) -> String {
        format!("{}:{}", self.database, self.collection)
    }

    /// Get connect timeout as Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Validate store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(uri) = self.uri() {
            if !uri.starts_with("redis://") && !uri.starts_with("rediss://") {
                return Err(ValidationError::InvalidStoreUri);
            }
        }
        if self.database.trim().is_empty() {
            return Err(ValidationError::MissingRequired("STORE_DATABASE"));
        }
        if self.collection.trim().is_empty() {
            return Err(ValidationError::MissingRequired("STORE_COLLECTION"));
        }
        if self.connect_timeout_ms == 0 || self.connect_timeout_ms > 30_000 {
            return Err(ValidationError::InvalidConnectTimeout);
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: None,
            database: default_database(),
            collection: default_collection(),
            connect_timeout_ms: default_connect_timeout(),
        }
    }
}

fn default_database() -> String {
    "assignment6".to_string()
}

fn default_collection() -> String {
    "submissions".to_string()
}

fn default_connect_timeout() -> u64 {
    2000
}
