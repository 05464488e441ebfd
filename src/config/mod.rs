//! Application configuration module
//!
//! Configuration is read once at start-up from environment variables (and a
//! `.env` file when present) using the `config` and `dotenvy` crates, then
//! passed explicitly to whatever needs it. Variables use the `BITWISE`
//! prefix and `__` between nested sections.
//!
//! # Example
//!
//! ```no_run
//! use bitwise::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Persistence enabled: {}", config.store.is_configured());
//! ```

mod error;
mod server;
mod store;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use store::StoreConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Optional document store
    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `BITWISE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BITWISE__STORE__URI=redis://...` -> `store.uri = Some(...)`
    /// - `BITWISE__STORE__DATABASE=stats` -> `store.database = "stats"`
    ///
    /// Every value has a default, so an empty environment loads a config
    /// with persistence disabled.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BITWISE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.store.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "BITWISE__SERVER__PORT",
        "BITWISE__SERVER__ENVIRONMENT",
        "BITWISE__STORE__URI",
        "BITWISE__STORE__DATABASE",
        "BITWISE__STORE__COLLECTION",
        "BITWISE__STORE__CONNECT_TIMEOUT_MS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_without_store_disables_persistence() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(!config.store.is_configured());
        assert_eq!(config.store.database, "assignment6");
        assert_eq!(config.store.collection, "submissions");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_store_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BITWISE__STORE__URI", "redis://localhost:6379");
        env::set_var("BITWISE__STORE__DATABASE", "stats");
        env::set_var("BITWISE__STORE__COLLECTION", "runs");
        env::set_var("BITWISE__STORE__CONNECT_TIMEOUT_MS", "500");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.store.uri(), Some("redis://localhost:6379"));
        assert_eq!(config.store.namespace(), "stats:runs");
        assert_eq!(config.store.connect_timeout_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BITWISE__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BITWISE__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }

    #[test]
    fn test_validate_rejects_bad_store_uri() {
        let config = AppConfig {
            store: StoreConfig {
                uri: Some("postgres://localhost/db".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidStoreUri));
    }
}
