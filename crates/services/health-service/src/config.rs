//! Health service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

const DEFAULT_DATABASE_URL: &str = "sqlite://health.db?mode=rwc";

/// Health service configuration.
#[derive(Debug, Clone)]
pub struct HealthServiceConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
}

impl HealthServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// `HEALTH_SERVICE_DATABASE_URL` wins over `DATABASE_URL`; SQLite and
    /// PostgreSQL URLs are both accepted.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "health-service".to_string(),
                log_level: env::var("HEALTH_SERVICE_LOG_LEVEL")
                    .unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("HEALTH_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                migrate_on_connect: env::var("HEALTH_SERVICE_AUTO_MIGRATE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(true),
            },
        }
    }

    /// Configuration pointing at the given database URL, other fields default.
    pub fn with_database_url(url: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.database.url = url.into();
        config
    }
}

impl Default for HealthServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "health-service".to_string(),
                log_level: "info".to_string(),
            },
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
                migrate_on_connect: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_local_sqlite() {
        let config = HealthServiceConfig::default();
        assert!(config.database.url.starts_with("sqlite://"));
        assert!(config.database.migrate_on_connect);
        assert_eq!(config.service.service_name, "health-service");
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = HealthServiceConfig::with_database_url("postgres://u:secret@db/health");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
    }
}
