//! Module declaration and two-phase lifecycle
//!
//! Construction is side-effect free; all registration against the host
//! (schema migration, service wiring, REST routes) happens in explicit
//! lifecycle calls.

use crate::config::Config;
use crate::contract::KnowledgebaseApi;
use crate::domain::Service;
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Knowledgebase module
pub struct KnowledgebaseModule {
    config: Config,
    service: RwLock<Option<Arc<Service>>>,
}

impl KnowledgebaseModule {
    /// Construct the module; performs no registration or I/O
    pub fn new(config: Config) -> Self {
        Self {
            config,
            service: RwLock::new(None),
        }
    }

    /// Run schema migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("knowledgebase migrations completed");
        Ok(())
    }

    /// Wire repositories and the domain service, seeding defaults
    pub async fn init(&self, db: Arc<DatabaseConnection>) -> Result<()> {
        let options_repo = Arc::new(
            crate::infra::storage::repositories::SeaOrmOptionsRepository::new(db.clone()),
        );
        let articles_repo = Arc::new(
            crate::infra::storage::repositories::SeaOrmArticlesRepository::new(db),
        );

        let service = Arc::new(Service::new(
            options_repo,
            articles_repo,
            self.config.admin_path.clone(),
        ));

        if self.config.seed_defaults {
            service.install().await?;
        }

        *self.service.write() = Some(service);

        tracing::info!("knowledgebase module initialized");
        Ok(())
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn KnowledgebaseApi>> {
        let service = self.service_handle()?;
        Ok(Arc::new(crate::api::native::NativeClient::new(service)))
    }

    /// Register the admin REST routes
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service_handle()?;
        tracing::info!("registering knowledgebase REST routes");
        Ok(crate::api::rest::routes::register_routes(router, service))
    }

    fn service_handle(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }
}
