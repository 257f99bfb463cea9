//! Health Service Library
//!
//! Patient and doctor accounts, health readings, medicine reminders, the
//! doctor-patient directory and rule-based recommendations, persisted with
//! SeaORM. The binary in `main.rs` drives it from the command line.

pub mod cli;
pub mod commands;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use common::AppResult;
use tracing::info;

use crate::config::HealthServiceConfig;
use crate::infra::Database;
use crate::repository::{
    DoctorProfileStore, HealthRecordStore, RecommendationStore, RelationshipStore, ReminderStore,
    UserStore,
};
use crate::service::{
    AccountManager, AccountService, DoctorPortal, DoctorPortalService, HealthLog, HealthLogService,
    RecommendationEngine, RecommendationService, ReminderBook, ReminderService,
};

/// Every service wired over one database connection.
pub struct HealthApp {
    db: Database,
    pub accounts: Arc<dyn AccountService>,
    pub health_log: Arc<dyn HealthLogService>,
    pub reminders: Arc<dyn ReminderService>,
    pub recommendations: Arc<dyn RecommendationService>,
    pub portal: Arc<dyn DoctorPortalService>,
}

impl HealthApp {
    /// Connect using the configuration, migrating first when enabled.
    pub async fn open(config: &HealthServiceConfig) -> AppResult<Self> {
        let db = if config.database.migrate_on_connect {
            Database::connect(&config.database.url).await?
        } else {
            Database::connect_without_migrations(&config.database.url).await?
        };
        info!(service = %config.service.service_name, "Database ready");
        Ok(Self::from_database(db))
    }

    /// Build repositories and services over an open database.
    pub fn from_database(db: Database) -> Self {
        let conn = db.get_connection();

        let users = Arc::new(UserStore::new(conn.clone()));
        let records = Arc::new(HealthRecordStore::new(conn.clone()));
        let reminders = Arc::new(ReminderStore::new(conn.clone()));
        let recommendations = Arc::new(RecommendationStore::new(conn.clone()));
        let relationships = Arc::new(RelationshipStore::new(conn.clone()));
        let profiles = Arc::new(DoctorProfileStore::new(conn));

        Self {
            accounts: Arc::new(AccountManager::new(users.clone())),
            health_log: Arc::new(HealthLog::new(records.clone())),
            reminders: Arc::new(ReminderBook::new(reminders)),
            recommendations: Arc::new(RecommendationEngine::new(
                records.clone(),
                recommendations,
            )),
            portal: Arc::new(DoctorPortal::new(users, profiles, relationships, records)),
            db,
        }
    }

    /// Underlying database gateway.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Drop the services and close the connection pool.
    pub async fn shutdown(self) -> AppResult<()> {
        self.db.close().await?;
        info!("Database connection closed");
        Ok(())
    }
}
