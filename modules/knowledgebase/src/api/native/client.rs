//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    Article, Breadcrumb, KnowledgebaseApi, KnowledgebaseError, RawSettingsForm, RedirectTarget,
    Settings, SettingsStatus, TocEntry,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl KnowledgebaseApi for NativeClient {
    async fn get_settings(&self) -> Result<Settings, KnowledgebaseError> {
        self.service.settings().await
    }

    async fn save_settings(
        &self,
        user_id: i64,
        form: RawSettingsForm,
    ) -> Result<(Settings, SettingsStatus), KnowledgebaseError> {
        self.service.save_settings(user_id, form).await
    }

    async fn take_user_status(
        &self,
        user_id: i64,
    ) -> Result<Option<SettingsStatus>, KnowledgebaseError> {
        self.service.take_user_status(user_id).await
    }

    async fn check_pending_redirect(
        &self,
    ) -> Result<Option<RedirectTarget>, KnowledgebaseError> {
        self.service.check_pending_redirect().await
    }

    async fn list_articles(&self) -> Result<Vec<TocEntry>, KnowledgebaseError> {
        self.service.list_articles().await
    }

    async fn get_article(&self, article_id: i64) -> Result<Article, KnowledgebaseError> {
        self.service.get_article(article_id).await
    }

    async fn breadcrumbs(&self, article_id: i64) -> Result<Vec<Breadcrumb>, KnowledgebaseError> {
        self.service.breadcrumbs(article_id).await
    }
}
